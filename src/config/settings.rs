//! User settings for the assistant
//!
//! Settings live in `config.json` under the base directory. Every field has a
//! serde default so older or hand-trimmed files keep loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::AssistantPaths;
use crate::error::{AssistantError, AssistantResult};
use crate::models::DEFAULT_PRIORITY;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Where CSV exports and reports are written; defaults to `<base>/exports`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Priority given to new tasks when none is supplied
    #[serde(default = "default_priority")]
    pub default_priority: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
            export_dir: None,
            default_priority: default_priority(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AssistantPaths) -> AssistantResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AssistantError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| AssistantError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AssistantPaths) -> AssistantResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AssistantError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AssistantError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The directory exports and reports are written to
    pub fn export_dir(&self, paths: &AssistantPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.audit_enabled);
        assert!(settings.export_dir.is_none());
        assert_eq!(settings.default_priority, "Medium");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.audit_enabled = false;
        settings.export_dir = Some(temp_dir.path().join("out"));
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.export_dir(&paths), temp_dir.path().join("out"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert_eq!(loaded.default_priority, "Medium");
        assert_eq!(loaded.export_dir(&paths), paths.export_dir());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));
    }
}
