//! One-lever sensitivity analysis.
//!
//! A sweep holds every scenario field at its base value except the chosen
//! [`Lever`], which is stepped across 0%–40% in whole percentage points.
//! Each sample is evaluated with [`crate::compute`]:
//!
//! ```
//! use roiplan_core::{Lever, RoiScenario, SweepMetric, sweep};
//!
//! let points = sweep(&RoiScenario::default(), Lever::ManpowerReduction, 15).unwrap();
//! assert_eq!(points.first().map(|p| p.lever_value), Some(0.0));
//!
//! let savings = SweepMetric::Savings.series(&points);
//! assert_eq!(savings.len(), points.len());
//! ```

mod config;
mod evaluator;
mod metrics;

pub use config::*;
pub use evaluator::*;
pub use metrics::*;
