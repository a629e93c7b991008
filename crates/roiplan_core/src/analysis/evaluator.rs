//! Sweep evaluation

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::evaluate::compute;
use crate::model::{RoiResult, RoiScenario};

use super::{Lever, sample_points};

/// One evaluated sample of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub lever_value: f64,
    pub result: RoiResult,
}

/// Evaluate `base` at every sampled value of `lever`.
///
/// Points come back in ascending lever order and the same arguments always
/// produce the same sequence. Only `steps < 2` is rejected.
pub fn sweep(base: &RoiScenario, lever: Lever, steps: usize) -> Result<Vec<SweepPoint>, SweepError> {
    let values = sample_points(steps)?;

    let evaluate = |&lever_value: &f64| SweepPoint {
        lever_value,
        result: compute(&lever.apply(base, lever_value)),
    };

    // collect() on an indexed parallel iterator keeps input order
    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = values.par_iter().map(evaluate).collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = values.iter().map(evaluate).collect();

    Ok(points)
}
