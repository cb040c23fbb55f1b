//! Finance Report
//!
//! Income, expense and balance totals over an inclusive date range, plus a
//! CSV file holding the matched records.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{AssistantError, AssistantResult};
use crate::export::export_to_path;
use crate::models::dates::parse_date;
use crate::models::{FinanceRecord, Money};
use crate::storage::FinanceRepository;

/// Finance report over `[start, end]`
#[derive(Debug, Clone)]
pub struct FinanceReport {
    /// First day of the range, as given
    pub start_text: String,
    /// Last day of the range, as given
    pub end_text: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Matched records, in stored order
    pub records: Vec<FinanceRecord>,
    /// Sum of positive amounts
    pub income: Money,
    /// Absolute sum of negative amounts
    pub expenses: Money,
    /// Signed sum of all matched amounts
    pub balance: Money,
}

impl FinanceReport {
    /// Build a report from the records dated within `[start_text, end_text]`
    ///
    /// # Errors
    ///
    /// Returns a format error if either boundary is not a valid `DD-MM-YYYY`
    /// date, or if a stored record carries a malformed date.
    pub fn generate(
        store: &FinanceRepository,
        start_text: &str,
        end_text: &str,
    ) -> AssistantResult<Self> {
        let start = parse_date(start_text)?;
        let end = parse_date(end_text)?;

        let records: Vec<FinanceRecord> = store
            .in_date_range(start, end)?
            .into_iter()
            .cloned()
            .collect();

        let overflow = || {
            AssistantError::Format(format!(
                "Finance totals for {} to {} exceed the supported amount range",
                start_text, end_text
            ))
        };
        let income = Money::checked_sum(records.iter().filter(|r| r.is_income()).map(|r| r.amount))
            .ok_or_else(overflow)?;
        let spent = Money::checked_sum(records.iter().filter(|r| r.is_expense()).map(|r| r.amount))
            .ok_or_else(overflow)?;
        let expenses = spent.checked_abs().ok_or_else(overflow)?;
        let balance = income.checked_add(spent).ok_or_else(overflow)?;

        Ok(Self {
            start_text: start_text.to_string(),
            end_text: end_text.to_string(),
            start,
            end,
            records,
            income,
            expenses,
            balance,
        })
    }

    /// Number of matched records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// `report_<start>_<end>.csv`, using the boundaries exactly as given
    pub fn file_name(&self) -> String {
        format!("report_{}_{}.csv", self.start_text, self.end_text)
    }

    /// Write the report file into `dir` and return its path
    pub fn save_to_dir(&self, dir: &Path) -> AssistantResult<PathBuf> {
        let path = dir.join(self.file_name());
        export_to_path(&self.records, &path)?;
        Ok(path)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Finance Report: {} to {}\n",
            self.start_text, self.end_text
        ));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Income:", self.income.to_string()));
        output.push_str(&format!("{:<20} {:>14}\n", "Expenses:", self.expenses.to_string()));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Balance:", self.balance.to_string()));
        output.push_str(&format!("{:<20} {:>14}\n", "Records:", self.count()));

        output
    }
}

/// Generate the report and write its file into `out_dir`
///
/// Nothing is written when the report cannot be generated.
pub fn generate_report(
    store: &FinanceRepository,
    start_text: &str,
    end_text: &str,
    out_dir: &Path,
) -> AssistantResult<(FinanceReport, PathBuf)> {
    let report = FinanceReport::generate(store, start_text, end_text)?;
    let path = report.save_to_dir(out_dir)?;
    Ok((report, path))
}
