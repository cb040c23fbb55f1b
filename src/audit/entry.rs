//! Audit log entries
//!
//! An entry is built from the record a store mutation touched. It keeps JSON
//! snapshots of that record, so the log can be read back without knowing the
//! record schema.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::generate_diff;
use crate::models::{Record, RecordId};

/// Kind of committed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `create` or one row of an import
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// The record schemas a store can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Note,
    Task,
    Contact,
    FinanceRecord,
}

impl EntityType {
    /// Name used in messages and "not found" errors
    pub const fn name(&self) -> &'static str {
        match self {
            EntityType::Note => "Note",
            EntityType::Task => "Task",
            EntityType::Contact => "Contact",
            EntityType::FinanceRecord => "Finance record",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub record_type: EntityType,
    pub record_id: RecordId,
    /// The record's label at the time of the change (title or name)
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    /// Changed fields of an update, `field: old -> new`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    /// Entry for a record added by `create` or by an import
    pub fn created<R: Record>(record: &R) -> Self {
        Self {
            after: snapshot(record),
            ..Self::header(Operation::Create, record)
        }
    }

    /// Entry for an edit, listing the fields that differ
    pub fn updated<R: Record>(before: &R, after: &R) -> Self {
        let before_value = snapshot(before);
        let after_value = snapshot(after);
        let changes = match (&before_value, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before: before_value,
            after: after_value,
            changes,
            ..Self::header(Operation::Update, after)
        }
    }

    /// Entry for a removed record
    pub fn deleted<R: Record>(record: &R) -> Self {
        Self {
            before: snapshot(record),
            ..Self::header(Operation::Delete, record)
        }
    }

    fn header<R: Record>(operation: Operation, record: &R) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            record_type: R::ENTITY_TYPE,
            record_id: record.id(),
            label: record.label(),
            before: None,
            after: None,
            changes: None,
        }
    }
}

fn snapshot<R: Record>(record: &R) -> Option<Value> {
    serde_json::to_value(record).ok()
}

/// `[time] OPERATION Type #id (label)`, with changes on a second line
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} #{}",
            self.timestamp.format("%d-%m-%Y %H:%M:%S UTC"),
            self.operation,
            self.record_type,
            self.record_id
        )?;
        if !self.label.is_empty() {
            write!(f, " ({})", self.label)?;
        }
        if let Some(changes) = &self.changes {
            write!(f, "\n  Changes: {}", changes)?;
        }
        Ok(())
    }
}
