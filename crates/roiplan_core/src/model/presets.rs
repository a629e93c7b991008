//! Named scenario templates
//!
//! Applying a preset yields a new scenario that replaces the active one.
//! The baseline operating cost is kept from the current inputs.

use super::scenario::RoiScenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    MallJewel,
    PrecinctJtc,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::MallJewel, Preset::PrecinctJtc];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::MallJewel => "Mall / Jewel-ish",
            Preset::PrecinctJtc => "Precinct / JTC-ish",
        }
    }

    pub fn apply(&self, current: &RoiScenario) -> RoiScenario {
        let (labor_share, manpower_reduction, productivity_gain, platform_cost) = match self {
            Preset::MallJewel => (0.80, 0.20, 0.25, 600_000.0),
            Preset::PrecinctJtc => (0.78, 0.18, 0.25, 750_000.0),
        };
        RoiScenario {
            annual_ops_cost: current.annual_ops_cost,
            labor_share,
            manpower_reduction,
            productivity_gain,
            platform_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keeps_baseline_cost() {
        let current = RoiScenario {
            annual_ops_cost: 8_000_000.0,
            ..RoiScenario::default()
        };
        let next = Preset::PrecinctJtc.apply(&current);
        assert_eq!(next.annual_ops_cost, 8_000_000.0);
        assert_eq!(next.labor_share, 0.78);
        assert_eq!(next.manpower_reduction, 0.18);
        assert_eq!(next.productivity_gain, 0.25);
        assert_eq!(next.platform_cost, 750_000.0);
    }

    #[test]
    fn test_mall_preset_matches_defaults() {
        let next = Preset::MallJewel.apply(&RoiScenario::default());
        assert_eq!(next, RoiScenario::default());
    }
}
