//! Per-point metrics extracted from a sweep for charting.

use serde::{Deserialize, Serialize};

use crate::model::RoiResult;

use super::SweepPoint;

/// Result column plotted against the lever
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepMetric {
    Savings,
    Roi,
    PaybackMonths,
}

impl SweepMetric {
    pub const ALL: [SweepMetric; 3] = [
        SweepMetric::Savings,
        SweepMetric::Roi,
        SweepMetric::PaybackMonths,
    ];

    /// Field-map name, matching the exported column
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Roi => "ROI (Savings / Platform)",
            Self::PaybackMonths => "Payback (months)",
        }
    }

    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Roi => "ROI",
            Self::PaybackMonths => "Payback",
        }
    }

    #[must_use]
    pub fn value(&self, result: &RoiResult) -> f64 {
        match self {
            Self::Savings => result.savings,
            Self::Roi => result.roi,
            Self::PaybackMonths => result.payback_months,
        }
    }

    /// `(lever_value, metric)` pairs in sweep order
    #[must_use]
    pub fn series(&self, points: &[SweepPoint]) -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|point| (point.lever_value, self.value(&point.result)))
            .collect()
    }

    /// Min and max of the metric across a sweep, `None` when empty
    #[must_use]
    pub fn range(&self, points: &[SweepPoint]) -> Option<(f64, f64)> {
        points.iter().map(|p| self.value(&p.result)).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
