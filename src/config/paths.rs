//! Path management for the assistant
//!
//! ## Path Resolution Order
//!
//! 1. `ASSISTANT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `assistant`
//!    (`~/.config/assistant` on Linux, `%APPDATA%\assistant` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::audit::EntityType;
use crate::error::{AssistantError, AssistantResult};

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ASSISTANT_DATA_DIR";

/// Manages all paths used by the assistant
#[derive(Debug, Clone)]
pub struct AssistantPaths {
    base_dir: PathBuf,
}

impl AssistantPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> AssistantResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the snapshot files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for CSV exports and reports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Snapshot file of one collection
    pub fn snapshot_file(&self, entity: EntityType) -> PathBuf {
        let name = match entity {
            EntityType::Note => "notes.json",
            EntityType::Task => "tasks.json",
            EntityType::Contact => "contacts.json",
            EntityType::FinanceRecord => "finance.json",
        };
        self.data_dir().join(name)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> AssistantResult<()> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AssistantError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AssistantError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> AssistantResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("assistant"))
        .ok_or_else(|| AssistantError::Config("Could not determine home directory".into()))
}
