//! Assistant - local personal-data manager
//!
//! Keeps notes, tasks, contacts and income/expense records in per-collection
//! JSON files, exchanges them with spreadsheets as CSV, and reports finance
//! totals over date ranges.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Record schemas (notes, tasks, contacts, finance records)
//! - `storage`: Generic record store over atomic JSON snapshots
//! - `export`: CSV column mappings, export and import
//! - `reports`: Finance report over a date range
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal tables and detail views
//! - `cli`: Command handlers for the `assistant` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use assistant::config::{paths::AssistantPaths, settings::Settings};
//! use assistant::models::NoteFields;
//! use assistant::storage::Storage;
//!
//! let paths = AssistantPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.notes()?.create(NoteFields::new("Groceries", "milk, bread"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{AssistantError, AssistantResult};
