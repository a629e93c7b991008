use std::path::{Path, PathBuf};

use roiplan_core::{Lever, Preset, RoiResult, RoiScenario, compute, sweep};

use super::screen_state::{CalculatorState, SensitivityState, SidebarState, TheoryState};
use super::tabs::TabId;
use crate::data::config_data::AppConfig;
use crate::data::docs::load_theory_documents;
use crate::data::storage::{DataDirectory, StorageError};

/// All mutable dashboard state.
///
/// The scenario is the single source of truth for the inputs; `result` and
/// the sensitivity sweep are derived from it and rebuilt on every change.
#[derive(Debug)]
pub struct AppState {
    pub active_tab: TabId,
    pub scenario: RoiScenario,
    pub result: RoiResult,
    pub sidebar_state: SidebarState,
    pub calculator_state: CalculatorState,
    pub sensitivity_state: SensitivityState,
    pub theory_state: TheoryState,
    pub docs_root: PathBuf,
    pub storage: Option<DataDirectory>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), PathBuf::from("."), None)
    }
}

impl AppState {
    pub fn new(config: AppConfig, docs_root: PathBuf, storage: Option<DataDirectory>) -> Self {
        let config = config.normalized();
        let mut state = Self {
            active_tab: TabId::Calculator,
            scenario: config.defaults,
            result: compute(&config.defaults),
            sidebar_state: SidebarState::default(),
            calculator_state: CalculatorState::default(),
            sensitivity_state: SensitivityState {
                lever: config.lever,
                steps: config.sweep_steps,
                points: Vec::new(),
            },
            theory_state: TheoryState::default(),
            docs_root,
            storage,
            error_message: None,
            status_message: None,
            exit: false,
        };
        state.reload_documents();
        state.refresh_sweep();
        state
    }

    /// Replace the active scenario and recompute everything derived from it
    pub fn set_scenario(&mut self, scenario: RoiScenario) {
        self.scenario = scenario;
        self.result = compute(&scenario);
        self.refresh_sweep();
        tracing::debug!(
            savings = self.result.savings,
            roi = self.result.roi,
            payback_months = self.result.payback_months,
            "Scenario updated"
        );
    }

    /// Step the focused sidebar input up or down by whole increments
    pub fn nudge_focused(&mut self, steps: i32) {
        let field = self.sidebar_state.focused();
        let next = field.nudge(self.scenario, steps);
        if next != self.scenario {
            self.set_scenario(next);
        }
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        tracing::info!(preset = preset.name(), "Applying preset");
        self.set_scenario(preset.apply(&self.scenario));
        self.set_status(format!("Loaded preset: {}", preset.name()));
    }

    pub fn set_lever(&mut self, lever: Lever) {
        self.sensitivity_state.lever = lever;
        self.refresh_sweep();
    }

    pub fn adjust_sweep_steps(&mut self, delta: isize) {
        if self.sensitivity_state.adjust_steps(delta) {
            self.refresh_sweep();
        }
    }

    fn refresh_sweep(&mut self) {
        let SensitivityState { lever, steps, .. } = self.sensitivity_state;
        match sweep(&self.scenario, lever, steps) {
            Ok(points) => self.sensitivity_state.points = points,
            Err(e) => {
                tracing::warn!(error = %e, "Sensitivity sweep failed");
                self.sensitivity_state.points.clear();
                self.set_error(e.to_string());
            }
        }
    }

    /// Re-read the theory documents from `docs_root`
    pub fn reload_documents(&mut self) {
        self.theory_state.documents = load_theory_documents(&self.docs_root);
        self.theory_state.scroll_offset = 0;
        let found = self.theory_state.documents.iter().filter(|d| d.found).count();
        tracing::info!(
            docs_root = %self.docs_root.display(),
            found,
            total = self.theory_state.documents.len(),
            "Loaded theory documents"
        );
    }

    /// Write the current result as CSV to the data directory
    pub fn export_csv(&mut self) -> Result<PathBuf, StorageError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StorageError::Io("No data directory configured".to_string()))?;
        let path = storage.write_export(&self.result)?;
        tracing::info!(path = %path.display(), "Exported results CSV");
        self.calculator_state.last_export = Some(path.clone());
        Ok(path)
    }

    /// Persist the current inputs and sweep settings as the startup defaults
    pub fn save_defaults(&self) -> Result<(), StorageError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StorageError::Io("No data directory configured".to_string()))?;
        let mut config = storage.load_config_or_default();
        config.defaults = self.scenario;
        config.lever = self.sensitivity_state.lever;
        config.sweep_steps = self.sensitivity_state.steps;
        storage.save_config(&config)?;
        tracing::info!(path = %storage.config_path().display(), "Saved default scenario");
        Ok(())
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.storage.as_ref().map(DataDirectory::root)
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roiplan_core::InputField;
    use tempfile::tempdir;

    fn state_without_docs() -> AppState {
        let dir = tempdir().unwrap();
        AppState::new(AppConfig::default(), dir.path().to_path_buf(), None)
    }

    #[test]
    fn test_initial_state_is_computed() {
        let state = state_without_docs();
        assert_eq!(state.scenario, RoiScenario::default());
        assert_eq!(state.result, compute(&RoiScenario::default()));
        assert_eq!(state.sensitivity_state.points.len(), 21);
        assert_eq!(state.theory_state.documents.len(), 3);
        assert!(state.theory_state.documents.iter().all(|d| !d.found));
    }

    #[test]
    fn test_nudge_recomputes_result_and_sweep() {
        let mut state = state_without_docs();
        state.sidebar_state.focused_field = 4; // platform cost
        assert_eq!(state.sidebar_state.focused(), InputField::PlatformCost);

        state.nudge_focused(-4);

        assert_eq!(state.scenario.platform_cost, 400_000.0);
        assert_eq!(state.result.platform_cost, 400_000.0);
        assert!(
            state
                .sensitivity_state
                .points
                .iter()
                .all(|p| p.result.platform_cost == 400_000.0)
        );
    }

    #[test]
    fn test_preset_replaces_active_scenario() {
        let mut state = state_without_docs();
        state.set_scenario(RoiScenario {
            annual_ops_cost: 7_000_000.0,
            ..RoiScenario::default()
        });

        state.apply_preset(Preset::PrecinctJtc);

        assert_eq!(state.scenario.annual_ops_cost, 7_000_000.0);
        assert_eq!(state.scenario.platform_cost, 750_000.0);
        assert_eq!(state.result, compute(&state.scenario));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_sweep_steps_are_clamped() {
        let mut state = state_without_docs();
        state.adjust_sweep_steps(100);
        assert_eq!(state.sensitivity_state.steps, 30);
        assert_eq!(state.sensitivity_state.points.len(), 41);

        state.adjust_sweep_steps(-100);
        assert_eq!(state.sensitivity_state.steps, 5);
        assert_eq!(state.sensitivity_state.points.len(), 5);
    }

    #[test]
    fn test_lever_change_resweeps() {
        let mut state = state_without_docs();
        state.set_lever(Lever::ProductivityGain);
        let first = state.sensitivity_state.points[0];
        assert_eq!(first.result.manpower_reduction, state.scenario.manpower_reduction);
        assert_eq!(first.result.productivity_gain, 0.0);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut state = state_without_docs();
        state.prev_tab();
        assert_eq!(state.active_tab, TabId::About);
        state.next_tab();
        assert_eq!(state.active_tab, TabId::Calculator);
    }

    #[test]
    fn test_export_without_storage_is_an_error() {
        let mut state = state_without_docs();
        assert!(state.export_csv().is_err());
    }

    #[test]
    fn test_export_and_save_defaults() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let mut state = AppState::new(
            AppConfig::default(),
            dir.path().to_path_buf(),
            Some(storage.clone()),
        );

        let path = state.export_csv().unwrap();
        assert!(path.exists());
        assert_eq!(state.calculator_state.last_export, Some(path));

        state.apply_preset(Preset::PrecinctJtc);
        state.set_lever(Lever::ProductivityGain);
        state.save_defaults().unwrap();

        let saved = storage.load_config().unwrap();
        assert_eq!(saved.defaults, state.scenario);
        assert_eq!(saved.lever, Lever::ProductivityGain);
    }
}
