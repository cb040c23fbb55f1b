//! Core data models for the assistant
//!
//! This module contains the record schemas of the four collections (notes,
//! tasks, contacts, finance entries) and the shared building blocks they use.

pub mod contact;
pub mod dates;
pub mod finance;
pub mod ids;
pub mod money;
pub mod note;
pub mod record;
pub mod task;

pub use contact::{Contact, ContactFields};
pub use finance::{FinanceFields, FinanceRecord};
pub use ids::RecordId;
pub use money::{Money, MoneyParseError};
pub use note::{Note, NoteFields};
pub use record::Record;
pub use task::{Task, TaskFields, TaskFilter, DEFAULT_PRIORITY, DONE_LABEL, PENDING_LABEL};
