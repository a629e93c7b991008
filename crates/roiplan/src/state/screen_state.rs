/// Per-screen state structs.

use roiplan_core::{InputField, Lever, SweepPoint};

use crate::data::config_data::{DEFAULT_SWEEP_STEPS, MAX_SWEEP_STEPS, MIN_SWEEP_STEPS};
use crate::data::docs::TheoryDocument;

#[derive(Debug, Default)]
pub struct SidebarState {
    pub focused_field: usize,
}

impl SidebarState {
    pub fn focused(&self) -> InputField {
        InputField::ALL[self.focused_field.min(InputField::ALL.len() - 1)]
    }

    pub fn move_up(&mut self) {
        self.focused_field = self.focused_field.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.focused_field + 1 < InputField::ALL.len() {
            self.focused_field += 1;
        }
    }
}

#[derive(Debug)]
pub struct SensitivityState {
    pub lever: Lever,
    pub steps: usize,
    /// Sweep of the current scenario, refreshed on every input change
    pub points: Vec<SweepPoint>,
}

impl Default for SensitivityState {
    fn default() -> Self {
        Self {
            lever: Lever::default(),
            steps: DEFAULT_SWEEP_STEPS,
            points: Vec::new(),
        }
    }
}

impl SensitivityState {
    /// Change the step count within the offered range; true if it changed
    pub fn adjust_steps(&mut self, delta: isize) -> bool {
        let next = self
            .steps
            .saturating_add_signed(delta)
            .clamp(MIN_SWEEP_STEPS, MAX_SWEEP_STEPS);
        let changed = next != self.steps;
        self.steps = next;
        changed
    }
}

#[derive(Debug, Default)]
pub struct TheoryState {
    pub documents: Vec<TheoryDocument>,
    pub scroll_offset: u16,
}

#[derive(Debug, Default)]
pub struct CalculatorState {
    /// Where the last CSV export was written
    pub last_export: Option<std::path::PathBuf>,
}
