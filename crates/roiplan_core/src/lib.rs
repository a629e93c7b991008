//! Return-on-investment model for platform-led operating cost scenarios
//!
//! This crate provides the arithmetic behind the ROI sandbox:
//! - A pure ROI model mapping five scalar assumptions to derived cost metrics
//! - One-lever sensitivity sweeps over the 0%–40% range
//! - Input bounds and presets used by the dashboard sidebar
//! - CSV export of a result's field map
//!
//! # Example
//!
//! ```
//! use roiplan_core::{RoiScenario, compute};
//!
//! let scenario = RoiScenario {
//!     annual_ops_cost: 5_000_000.0,
//!     labor_share: 0.80,
//!     manpower_reduction: 0.20,
//!     productivity_gain: 0.25,
//!     platform_cost: 600_000.0,
//! };
//!
//! let result = compute(&scenario);
//! assert!((result.new_cost - 4_800_000.0).abs() < 1e-6);
//! assert!((result.savings - 200_000.0).abs() < 1e-6);
//! assert!((result.payback_months - 36.0).abs() < 1e-9);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod export;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{Lever, SweepMetric, SweepPoint, sweep};
pub use error::{ExportError, SweepError};
pub use evaluate::compute;
pub use model::{InputBounds, InputField, Preset, RoiResult, RoiScenario};
