//! Input fields and the ranges the dashboard offers for them
//!
//! The ROI model is total over all reals; these bounds only govern what the
//! sidebar lets a user dial in and what a loaded config is clamped to.

use super::scenario::RoiScenario;

/// Allowed range and increment for one input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    /// `None` means unbounded above
    pub max: Option<f64>,
    pub step: f64,
}

impl InputBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Move `value` by `steps` increments and clamp.
    ///
    /// The result is snapped to the step grid. Fractional steps divide by the
    /// whole number of steps per unit, so 0.30 + 0.01 × 5 is exactly `0.35`.
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let raw = value + self.step * f64::from(steps);
        self.clamp(self.snap(raw))
    }

    fn snap(&self, value: f64) -> f64 {
        if self.step < 1.0 {
            let per_unit = (1.0 / self.step).round();
            (value * per_unit).round() / per_unit
        } else {
            (value / self.step).round() * self.step
        }
    }
}

/// One of the five scenario inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    AnnualOpsCost,
    LaborShare,
    ManpowerReduction,
    ProductivityGain,
    PlatformCost,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::AnnualOpsCost,
        InputField::LaborShare,
        InputField::ManpowerReduction,
        InputField::ProductivityGain,
        InputField::PlatformCost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::AnnualOpsCost => "Baseline annual ops cost ($)",
            InputField::LaborShare => "Labor share of ops cost",
            InputField::ManpowerReduction => "Manpower reduction (%)",
            InputField::ProductivityGain => "Productivity gain (%)",
            InputField::PlatformCost => "Annual platform + change mgmt cost ($)",
        }
    }

    pub fn bounds(&self) -> InputBounds {
        match self {
            InputField::AnnualOpsCost => InputBounds {
                min: 500_000.0,
                max: None,
                step: 100_000.0,
            },
            InputField::LaborShare => InputBounds {
                min: 0.30,
                max: Some(0.95),
                step: 0.01,
            },
            InputField::ManpowerReduction => InputBounds {
                min: 0.0,
                max: Some(0.50),
                step: 0.01,
            },
            InputField::ProductivityGain => InputBounds {
                min: 0.0,
                max: Some(0.40),
                step: 0.01,
            },
            InputField::PlatformCost => InputBounds {
                min: 100_000.0,
                max: None,
                step: 50_000.0,
            },
        }
    }

    /// Whether the field holds a dollar amount rather than a fraction
    pub fn is_currency(&self) -> bool {
        matches!(self, InputField::AnnualOpsCost | InputField::PlatformCost)
    }

    pub fn get(&self, scenario: &RoiScenario) -> f64 {
        match self {
            InputField::AnnualOpsCost => scenario.annual_ops_cost,
            InputField::LaborShare => scenario.labor_share,
            InputField::ManpowerReduction => scenario.manpower_reduction,
            InputField::ProductivityGain => scenario.productivity_gain,
            InputField::PlatformCost => scenario.platform_cost,
        }
    }

    /// Return a copy of `scenario` with this field replaced
    pub fn set(&self, scenario: RoiScenario, value: f64) -> RoiScenario {
        let mut next = scenario;
        match self {
            InputField::AnnualOpsCost => next.annual_ops_cost = value,
            InputField::LaborShare => next.labor_share = value,
            InputField::ManpowerReduction => next.manpower_reduction = value,
            InputField::ProductivityGain => next.productivity_gain = value,
            InputField::PlatformCost => next.platform_cost = value,
        }
        next
    }

    /// Step this field up or down within its bounds
    pub fn nudge(&self, scenario: RoiScenario, steps: i32) -> RoiScenario {
        let value = self.bounds().nudge(self.get(&scenario), steps);
        self.set(scenario, value)
    }
}

impl RoiScenario {
    /// Clamp every field into the range the dashboard offers
    pub fn clamped(self) -> Self {
        InputField::ALL.iter().fold(self, |scenario, field| {
            let value = field.bounds().clamp(field.get(&scenario));
            field.set(scenario, value)
        })
    }
}
