//! Reports module for the assistant
//!
//! Provides the finance report: totals over a date range and a CSV file of the
//! matched records.

pub mod finance;

pub use finance::{generate_report, FinanceReport};
