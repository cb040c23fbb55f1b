//! Storage layer for the assistant
//!
//! Each collection lives in its own JSON snapshot under the data directory and
//! is written atomically on every mutation.

pub mod contacts;
pub mod file_io;
pub mod finance;
pub mod notes;
pub mod store;
pub mod tasks;

pub use contacts::ContactRepository;
pub use file_io::{load, save};
pub use finance::FinanceRepository;
pub use notes::NoteRepository;
pub use store::RecordStore;
pub use tasks::TaskRepository;

use crate::audit::AuditLogger;
use crate::config::paths::AssistantPaths;
use crate::config::settings::Settings;
use crate::error::AssistantResult;
use crate::models::Record;

/// Storage coordinator that opens the per-collection stores
///
/// Stores are opened on demand so a damaged snapshot of one collection does
/// not block work on the others.
pub struct Storage {
    paths: AssistantPaths,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: AssistantPaths, settings: &Settings) -> AssistantResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self { paths, audit })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AssistantPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Open the store of one record schema
    pub fn open<R: Record>(&self) -> AssistantResult<RecordStore<R>> {
        let store = RecordStore::open(self.paths.snapshot_file(R::ENTITY_TYPE))?;
        Ok(match &self.audit {
            Some(logger) => store.with_audit(logger.clone()),
            None => store,
        })
    }

    pub fn notes(&self) -> AssistantResult<NoteRepository> {
        self.open()
    }

    pub fn tasks(&self) -> AssistantResult<TaskRepository> {
        self.open()
    }

    pub fn contacts(&self) -> AssistantResult<ContactRepository> {
        self.open()
    }

    pub fn finance(&self) -> AssistantResult<FinanceRepository> {
        self.open()
    }
}
