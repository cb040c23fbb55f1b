//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the record stores.

pub mod contact;
pub mod finance;
pub mod history;
pub mod note;
pub mod task;

pub use contact::{handle_contact_command, ContactCommands};
pub use finance::{handle_finance_command, FinanceCommands};
pub use history::handle_history_command;
pub use note::{handle_note_command, NoteCommands};
pub use task::{handle_task_command, TaskCommands};

use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::AssistantResult;
use crate::export::{export_to_path, import_from_path, CsvSchema};
use crate::models::dates::parse_date;
use crate::models::Record;
use crate::storage::{RecordStore, Storage};

/// Export a whole collection, to `output` or the configured export directory
pub(crate) fn export_collection<R: CsvSchema>(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
) -> AssistantResult<()> {
    let store = storage.open::<R>()?;
    let path =
        output.unwrap_or_else(|| settings.export_dir(storage.paths()).join(R::EXPORT_FILE_NAME));

    let count = export_to_path(store.list(), &path)?;
    println!("Exported {} record(s) to {}", count, path.display());
    Ok(())
}

/// Append the rows of a CSV file to a collection
pub(crate) fn import_collection<R: CsvSchema>(storage: &Storage, file: &Path) -> AssistantResult<()> {
    let mut store = storage.open::<R>()?;
    let added = import_from_path(&mut store, file)?;
    warn_unaudited(&mut store);
    println!("Imported {} record(s) from {}", added.len(), file.display());
    Ok(())
}

/// Report an audit log write that failed after a change was saved
pub(crate) fn warn_unaudited<R: Record>(store: &mut RecordStore<R>) {
    if let Some(err) = store.take_audit_error() {
        eprintln!("Warning: change saved but not recorded in the audit log: {}", err);
    }
}

/// Validate a `DD-MM-YYYY` argument, returning it unchanged
pub(crate) fn checked_date(date: String) -> AssistantResult<String> {
    parse_date(&date)?;
    Ok(date)
}
