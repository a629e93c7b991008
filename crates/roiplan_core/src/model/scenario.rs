//! Scenario assumptions
//!
//! A scenario is the complete set of inputs to the ROI model. It is a plain
//! `Copy` value: callers build a fresh one per interaction and pass it
//! explicitly to [`crate::compute`] or [`crate::sweep`].

use serde::{Deserialize, Serialize};

/// Cost, labor and platform assumptions for a single ROI evaluation.
///
/// Fields are stored as fractions (`0.20` means 20%). The model never
/// validates them; see [`crate::InputBounds`] for the ranges the dashboard
/// offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiScenario {
    /// Baseline annual operating cost in dollars
    pub annual_ops_cost: f64,
    /// Fraction of the operating cost that is labor
    pub labor_share: f64,
    /// Fraction of labor cost removed by the platform
    pub manpower_reduction: f64,
    /// Throughput gain, display only
    pub productivity_gain: f64,
    /// Annual platform and change-management cost in dollars
    pub platform_cost: f64,
}

impl Default for RoiScenario {
    /// Mirrors the case narrative: labor ~80% of cost, ~20% manpower
    /// reduction, ~25% productivity gain, platform cost ~$600k.
    fn default() -> Self {
        Self {
            annual_ops_cost: 5_000_000.0,
            labor_share: 0.80,
            manpower_reduction: 0.20,
            productivity_gain: 0.25,
            platform_cost: 600_000.0,
        }
    }
}

impl RoiScenario {
    pub fn with_manpower_reduction(mut self, value: f64) -> Self {
        self.manpower_reduction = value;
        self
    }

    pub fn with_productivity_gain(mut self, value: f64) -> Self {
        self.productivity_gain = value;
        self
    }

    pub fn with_platform_cost(mut self, value: f64) -> Self {
        self.platform_cost = value;
        self
    }
}
