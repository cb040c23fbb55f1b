//! Display formatting for terminal output
//!
//! Lists render as `psql`-style tables; single records render as labelled
//! detail blocks.

pub mod contact;
pub mod finance;
pub mod note;
pub mod task;

pub use contact::{format_contact_details, format_contact_list};
pub use finance::{format_finance_details, format_finance_list};
pub use note::{format_note_details, format_note_list};
pub use task::{format_task_details, format_task_list};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a table, or `empty_message` when there are none
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>, empty_message: &str) -> String {
    if rows.is_empty() {
        return empty_message.to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Shorten text to `max` characters for table cells
pub(crate) fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() > max {
        let kept: String = single_line.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        single_line
    }
}
