//! Append-only audit log file
//!
//! The log is JSON lines: every entry is one serialized [`AuditEntry`]
//! terminated by a newline, so appends never rewrite earlier history.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AssistantError, AssistantResult};

use super::entry::AuditEntry;

/// Reader and writer for one audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// The file is created on the first append
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn log(&self, entry: &AuditEntry) -> AssistantResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append `entries` in order with a single open and flush
    ///
    /// An import logs its whole batch this way.
    pub fn log_batch(&self, entries: &[AuditEntry]) -> AssistantResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        let mut writer = BufWriter::new(file);

        for entry in entries {
            let line = serde_json::to_string(entry).map_err(|e| {
                AssistantError::Json(format!(
                    "Failed to serialize audit entry for {} #{}: {}",
                    entry.record_type, entry.record_id, e
                ))
            })?;
            writeln!(writer, "{}", line).map_err(|e| self.io_error("write", e))?;
        }

        writer.flush().map_err(|e| self.io_error("flush", e))
    }

    /// Every logged entry, oldest first; a missing file is an empty log
    ///
    /// # Errors
    ///
    /// Returns a parse error naming the line number of the first line that is
    /// not a valid entry.
    pub fn read_all(&self) -> AssistantResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| self.io_error("open", e))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                AssistantError::Parse(format!(
                    "Invalid audit entry at {} line {}: {}",
                    self.log_path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> AssistantResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> AssistantError {
        AssistantError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Note, NoteFields, Record, RecordId, Task, TaskFields};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn note(id: u64) -> Note {
        Note::from_fields(RecordId::new(id), NoteFields::new(format!("Note {}", id), ""))
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&AuditEntry::created(&note(1))).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].record_type, EntityType::Note);
        assert_eq!(entries[0].label, "Note 1");
    }

    #[test]
    fn test_import_batch_is_one_line_per_record() {
        let (logger, _temp) = create_test_logger();
        let notes: Vec<_> = (1..=3).map(note).collect();
        let entries: Vec<_> = notes.iter().map(AuditEntry::created).collect();

        logger.log_batch(&entries).unwrap();

        let text = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(text.lines().count(), 3);
        let ids: Vec<_> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.record_id.value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_batch_creates_no_file() {
        let (logger, _temp) = create_test_logger();
        logger.log_batch(&[]).unwrap();
        assert!(!logger.path().exists());
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let (logger, _temp) = create_test_logger();
        for i in 1..=10 {
            logger.log(&AuditEntry::created(&note(i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let labels: Vec<_> = recent.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Note 8", "Note 9", "Note 10"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_task_update_survives_reopen() {
        let (logger, temp) = create_test_logger();
        let before = Task::from_fields(RecordId::new(4), TaskFields::new("Pay rent", ""));
        let mut after = before.clone();
        after.done = true;
        logger.log(&AuditEntry::updated(&before, &after)).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        let entries = reopened.read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].changes.as_deref(), Some("done: false -> true"));
    }

    #[test]
    fn test_corrupt_line_is_parse_error() {
        let (logger, _temp) = create_test_logger();
        logger.log(&AuditEntry::created(&note(1))).unwrap();
        let mut text = std::fs::read_to_string(logger.path()).unwrap();
        text.push_str("{\"operation\":\"create\"\n");
        std::fs::write(logger.path(), text).unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("line 2"));
    }
}
