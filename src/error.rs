//! Custom error types for the assistant
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (missing or unwritable files)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot content is not valid structured data
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed date or numeric input
    #[error("Format error: {0}")]
    Format(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl AssistantError {
    /// Create a "not found" error for any entity type
    pub fn not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for notes
    pub fn note_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Note", identifier)
    }

    /// Create a "not found" error for tasks
    pub fn task_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Task", identifier)
    }

    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Contact", identifier)
    }

    /// Create a "not found" error for finance records
    pub fn finance_record_not_found(identifier: impl Into<String>) -> Self {
        Self::not_found("Finance record", identifier)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Check if this is a snapshot parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for AssistantError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Import(err.to_string())
        }
    }
}

/// Result type alias for assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;
