//! Audit history command

use crate::audit::AuditLogger;
use crate::error::AssistantResult;
use crate::storage::Storage;

/// Print the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> AssistantResult<()> {
    let logger = AuditLogger::new(storage.paths().audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}
