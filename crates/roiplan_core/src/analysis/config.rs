//! Sweep levers and sampling.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::model::RoiScenario;

/// Upper end of the swept range, in percentage points
pub const SWEEP_MAX_PERCENT: u32 = 40;

/// Scenario field varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lever {
    #[default]
    ManpowerReduction,
    ProductivityGain,
}

impl Lever {
    pub const ALL: [Lever; 2] = [Lever::ManpowerReduction, Lever::ProductivityGain];

    pub fn label(&self) -> &'static str {
        match self {
            Lever::ManpowerReduction => "Manpower reduction (%)",
            Lever::ProductivityGain => "Productivity gain (%)",
        }
    }

    /// Axis label for charts
    pub fn short_label(&self) -> &'static str {
        match self {
            Lever::ManpowerReduction => "Manpower cut",
            Lever::ProductivityGain => "Productivity gain",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Lever::ManpowerReduction => {
                "Higher manpower cuts on a high-labor-cost base typically improve ROI and reduce payback."
            }
            Lever::ProductivityGain => {
                "Productivity gains enhance economics even without deeper manpower cuts."
            }
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lever::ManpowerReduction => Lever::ProductivityGain,
            Lever::ProductivityGain => Lever::ManpowerReduction,
        }
    }

    /// Copy of `base` with this lever set to `value`
    pub fn apply(&self, base: &RoiScenario, value: f64) -> RoiScenario {
        match self {
            Lever::ManpowerReduction => base.with_manpower_reduction(value),
            Lever::ProductivityGain => base.with_productivity_gain(value),
        }
    }
}

/// Stride in whole percentage points for a given step count.
///
/// `max(1, floor(40 / (steps - 1)))`; fewer than two steps has no stride.
pub fn stride(steps: usize) -> Result<usize, SweepError> {
    if steps < 2 {
        return Err(SweepError::TooFewSteps { steps });
    }
    Ok((SWEEP_MAX_PERCENT as usize / (steps - 1)).max(1))
}

/// Lever values sampled for a sweep, ascending, as fractions.
///
/// The count is the number of stride multiples in `0..=40`, which is not
/// always equal to `steps` (15 steps gives a stride of 2 and 21 points).
pub fn sample_points(steps: usize) -> Result<Vec<f64>, SweepError> {
    let stride = stride(steps)?;
    Ok((0..=SWEEP_MAX_PERCENT as usize)
        .step_by(stride)
        .map(|percent| percent as f64 / 100.0)
        .collect())
}
