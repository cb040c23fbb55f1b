//! CSV exchange format for the assistant's collections
//!
//! - `schema`: per-record column mappings and import defaults
//! - `csv`: reading and writing files in that format

pub mod csv;
pub mod schema;

pub use self::csv::{export_records, export_to_path, import_from_path, read_records};
pub use schema::{CsvRow, CsvSchema};
