//! Audit trail of committed record changes
//!
//! A store with a logger attached appends one [`AuditEntry`] per created,
//! updated or deleted record to `audit.log`, one JSON object per line. Update
//! entries carry a short `field: old -> new` summary from [`generate_diff`].
//!
//! ```rust,ignore
//! use assistant::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::created(&note))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
