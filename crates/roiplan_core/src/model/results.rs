//! ROI model output
//!
//! [`RoiResult`] holds every metric derived from a scenario, including the
//! echoed inputs so a result can be exported on its own.

use serde::{Deserialize, Serialize};

/// Column names of the exported field map, in export order.
pub const FIELD_NAMES: [&str; 10] = [
    "Baseline cost",
    "New cost",
    "Savings",
    "Platform cost",
    "ROI (Savings / Platform)",
    "Payback (months)",
    "Labor share",
    "Manpower reduction (%)",
    "Productivity gain (%)",
    "Throughput multiplier (1+prod)",
];

/// Derived financial metrics for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub baseline_cost: f64,
    pub new_cost: f64,
    pub savings: f64,
    pub platform_cost: f64,
    /// Savings divided by platform cost, zero when platform cost is zero
    pub roi: f64,
    pub payback_months: f64,

    // Echoed inputs
    pub labor_share: f64,
    pub manpower_reduction: f64,
    pub productivity_gain: f64,
    pub throughput_multiplier: f64,

    // Cost breakdown
    pub labor_cost: f64,
    pub non_labor_cost: f64,
    pub labor_savings: f64,
}

impl RoiResult {
    /// Field-name to value pairs in [`FIELD_NAMES`] order.
    ///
    /// The cost breakdown is not part of the map.
    pub fn fields(&self) -> [(&'static str, f64); 10] {
        let values = [
            self.baseline_cost,
            self.new_cost,
            self.savings,
            self.platform_cost,
            self.roi,
            self.payback_months,
            self.labor_share,
            self.manpower_reduction,
            self.productivity_gain,
            self.throughput_multiplier,
        ];
        let mut out = [("", 0.0); 10];
        for (slot, (name, value)) in out.iter_mut().zip(FIELD_NAMES.into_iter().zip(values)) {
            *slot = (name, value);
        }
        out
    }
}
