//! Finance record display formatting

use tabled::Tabled;

use super::{render_table, truncate};
use crate::models::FinanceRecord;

#[derive(Tabled)]
struct FinanceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of finance records as a table
pub fn format_finance_list(records: &[FinanceRecord]) -> String {
    let rows = records
        .iter()
        .map(|record| FinanceRow {
            id: record.id.to_string(),
            amount: record.amount.to_string(),
            category: record.category.clone(),
            date: record.date.clone(),
            description: truncate(&record.description, 40),
        })
        .collect();

    render_table(rows, "No finance records found.")
}

pub fn format_finance_details(record: &FinanceRecord) -> String {
    let kind = if record.is_income() {
        "income"
    } else if record.is_expense() {
        "expense"
    } else {
        "zero"
    };

    format!(
        "Finance record #{}\nAmount:      {} ({})\nCategory:    {}\nDate:        {}\nDescription: {}\n",
        record.id, record.amount, kind, record.category, record.date, record.description
    )
}
