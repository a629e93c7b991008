//! The ROI model
//!
//! A didactic cost model:
//! - Labor cost is `annual_ops_cost * labor_share`, the remainder is non-labor
//! - Manpower reduction applies to the labor portion only
//! - The platform cost is added on top of the reduced cost base
//! - Productivity gain is reported as a throughput multiplier and never fed
//!   back into cost, so it is not double-counted with the manpower savings

use crate::model::{RoiResult, RoiScenario};

/// Payback divisor floor, keeps payback finite when savings are tiny or negative
const MIN_PAYBACK_SAVINGS: f64 = 1.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Evaluate a scenario.
///
/// Total over all real inputs: no validation is performed and nothing can
/// fail. ROI is zero when platform cost is zero, and payback is zero unless
/// platform cost is positive.
pub fn compute(scenario: &RoiScenario) -> RoiResult {
    let RoiScenario {
        annual_ops_cost,
        labor_share,
        manpower_reduction,
        productivity_gain,
        platform_cost,
    } = *scenario;

    let labor_cost = annual_ops_cost * labor_share;
    let non_labor_cost = annual_ops_cost * (1.0 - labor_share);

    let labor_savings = labor_cost * manpower_reduction;
    let new_cost = (labor_cost - labor_savings) + non_labor_cost + platform_cost;
    let savings = annual_ops_cost - new_cost;

    let roi = if platform_cost != 0.0 {
        savings / platform_cost
    } else {
        0.0
    };

    let payback_months = if platform_cost > 0.0 {
        MONTHS_PER_YEAR * (platform_cost / savings.max(MIN_PAYBACK_SAVINGS))
    } else {
        0.0
    };

    RoiResult {
        baseline_cost: annual_ops_cost,
        new_cost,
        savings,
        platform_cost,
        roi,
        payback_months,
        labor_share,
        manpower_reduction,
        productivity_gain,
        throughput_multiplier: 1.0 + productivity_gain,
        labor_cost,
        non_labor_cost,
        labor_savings,
    }
}
