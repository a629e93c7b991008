//! Data directory layout
//!
//! Directory structure:
//! ~/.roiplan/
//!   config.yaml                           # Default scenario and sweep settings
//!   roiplan.log                           # Application log
//!   security_plus_roi_results.csv         # Latest CSV export

use std::fs;
use std::path::{Path, PathBuf};

use roiplan_core::RoiResult;
use roiplan_core::export::{EXPORT_FILE_NAME, to_csv};

use super::config_data::AppConfig;
use crate::util::io::atomic_write;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.roiplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".roiplan")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to config.yaml
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Get the path the CSV export is written to
    pub fn export_path(&self) -> PathBuf {
        self.root.join(EXPORT_FILE_NAME)
    }

    /// Load the config file, or defaults when it does not exist
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        AppConfig::from_yaml(&content)
            .map(AppConfig::normalized)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Load the config file, falling back to defaults on any error
    pub fn load_config_or_default(&self) -> AppConfig {
        match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %self.config_path().display(), error = %e, "Using default configuration");
                AppConfig::default()
            }
        }
    }

    /// Save the config file
    pub fn save_config(&self, config: &AppConfig) -> Result<(), StorageError> {
        let yaml = config
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&self.config_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Write `result` as CSV into the data directory and return the file path
    pub fn write_export(&self, result: &RoiResult) -> Result<PathBuf, StorageError> {
        let csv = to_csv(result)
            .map_err(|e| StorageError::Serialize(format!("Failed to encode CSV: {}", e)))?;

        let path = self.export_path();
        atomic_write(&path, &csv)
            .map_err(|e| StorageError::Io(format!("Failed to write export: {}", e)))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roiplan_core::{Lever, RoiScenario, compute};
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_gives_defaults() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());

        assert_eq!(storage.load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_saved_config_is_loaded() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().join("nested"));
        let config = AppConfig {
            defaults: RoiScenario {
                platform_cost: 750_000.0,
                ..RoiScenario::default()
            },
            lever: Lever::ProductivityGain,
            sweep_steps: 30,
            docs_dir: None,
        };

        storage.save_config(&config).unwrap();

        assert_eq!(storage.load_config().unwrap(), config);
    }

    #[test]
    fn test_corrupt_config_falls_back() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        fs::write(storage.config_path(), "defaults: [1, 2").unwrap();

        assert!(matches!(storage.load_config(), Err(StorageError::Parse(_))));
        assert_eq!(storage.load_config_or_default(), AppConfig::default());
    }

    #[test]
    fn test_write_export() {
        let dir = tempdir().unwrap();
        let storage = DataDirectory::new(dir.path().to_path_buf());
        let result = compute(&RoiScenario::default());

        let path = storage.write_export(&result).unwrap();

        assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));
        assert_eq!(path, storage.export_path());
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Baseline cost,New cost,Savings"));
        assert_eq!(content.lines().count(), 2);
    }
}
