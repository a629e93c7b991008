//! Dashboard configuration data.
//!
//! Serialized to/from `~/.roiplan/config.yaml`. Every field is optional in
//! the file; missing fields take the built-in defaults.

use std::path::PathBuf;

use roiplan_core::{Lever, RoiScenario};
use serde::{Deserialize, Serialize};

/// Fewest sweep steps the sensitivity tab offers
pub const MIN_SWEEP_STEPS: usize = 5;
/// Most sweep steps the sensitivity tab offers
pub const MAX_SWEEP_STEPS: usize = 30;
pub const DEFAULT_SWEEP_STEPS: usize = 15;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scenario loaded into the sidebar at startup
    pub defaults: RoiScenario,
    /// Initial sensitivity lever
    pub lever: Lever,
    /// Initial sensitivity step count
    pub sweep_steps: usize,
    /// Root directory for theory documents, overridden by `--docs-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: RoiScenario::default(),
            lever: Lever::default(),
            sweep_steps: DEFAULT_SWEEP_STEPS,
            docs_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Pull hand-edited values back into the ranges the dashboard offers
    pub fn normalized(self) -> Self {
        Self {
            defaults: self.defaults.clamped(),
            sweep_steps: self.sweep_steps.clamp(MIN_SWEEP_STEPS, MAX_SWEEP_STEPS),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "defaults:\n  platform_cost: 750000.0\nsweep_steps: 20\n";
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.defaults.platform_cost, 750_000.0);
        assert_eq!(config.defaults.annual_ops_cost, 5_000_000.0);
        assert_eq!(config.defaults.labor_share, 0.80);
        assert_eq!(config.sweep_steps, 20);
        assert_eq!(config.lever, Lever::ManpowerReduction);
        assert_eq!(config.docs_dir, None);
    }

    #[test]
    fn test_lever_and_docs_dir() {
        let yaml = "lever: ProductivityGain\ndocs_dir: /srv/course\n";
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.lever, Lever::ProductivityGain);
        assert_eq!(config.docs_dir, Some(PathBuf::from("/srv/course")));
    }

    #[test]
    fn test_normalized_clamps_out_of_range_values() {
        let config = AppConfig {
            defaults: RoiScenario {
                labor_share: 1.2,
                platform_cost: 0.0,
                ..RoiScenario::default()
            },
            sweep_steps: 1,
            ..AppConfig::default()
        }
        .normalized();

        assert_eq!(config.defaults.labor_share, 0.95);
        assert_eq!(config.defaults.platform_cost, 100_000.0);
        assert_eq!(config.sweep_steps, MIN_SWEEP_STEPS);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("sweep_steps: [not a number").is_err());
    }
}
