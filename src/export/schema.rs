//! Column mappings between records and their CSV exchange format
//!
//! Each record schema names its display headers, renders itself as a row, and
//! rebuilds its fields from a row, falling back to per-field defaults for
//! columns the file does not carry.

use ::csv::StringRecord;

use crate::error::{AssistantError, AssistantResult};
use crate::models::dates::{now_timestamp, today};
use crate::models::{
    Contact, ContactFields, FinanceFields, FinanceRecord, Money, Note, NoteFields, Record, Task,
    TaskFields, DEFAULT_PRIORITY, DONE_LABEL,
};

/// One data row of an imported file, addressed by header name
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> CsvRow<'a> {
    pub fn new(headers: &'a StringRecord, record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    /// The cell under `column`, or `None` if the file has no such column
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h.trim() == column)
            .and_then(|idx| self.record.get(idx))
    }

    /// The cell under `column`, or empty text if the column is absent
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }
}

/// A record schema with a CSV column mapping
pub trait CsvSchema: Record {
    /// Display headers, in column order; the first is always the id column
    const HEADERS: &'static [&'static str];

    /// File name used when exporting without an explicit destination
    const EXPORT_FILE_NAME: &'static str;

    /// Render this record as one row matching `HEADERS`
    fn to_row(&self) -> Vec<String>;

    /// Build record fields from a row; any id column is ignored
    ///
    /// # Errors
    ///
    /// Returns a format error if a present cell cannot be interpreted.
    fn from_row(row: &CsvRow<'_>) -> AssistantResult<Self::Fields>;
}

impl CsvSchema for Note {
    const HEADERS: &'static [&'static str] = &["ID", "Title", "Content", "Date"];
    const EXPORT_FILE_NAME: &'static str = "notes_export.csv";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.clone(),
            self.timestamp.clone(),
        ]
    }

    fn from_row(row: &CsvRow<'_>) -> AssistantResult<NoteFields> {
        Ok(NoteFields {
            title: row.text("Title"),
            content: row.text("Content"),
            timestamp: row
                .get("Date")
                .map(str::to_string)
                .unwrap_or_else(now_timestamp),
        })
    }
}

impl CsvSchema for Task {
    const HEADERS: &'static [&'static str] =
        &["ID", "Name", "Description", "Status", "Priority", "Due date"];
    const EXPORT_FILE_NAME: &'static str = "tasks_export.csv";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.status_label().to_string(),
            self.priority.clone(),
            self.due_date.clone().unwrap_or_default(),
        ]
    }

    fn from_row(row: &CsvRow<'_>) -> AssistantResult<TaskFields> {
        Ok(TaskFields {
            title: row.text("Name"),
            description: row.text("Description"),
            done: row.get("Status") == Some(DONE_LABEL),
            priority: row
                .get("Priority")
                .map_or_else(|| DEFAULT_PRIORITY.to_string(), str::to_string),
            due_date: row
                .get("Due date")
                .filter(|due| !due.is_empty())
                .map(str::to_string),
        })
    }
}

impl CsvSchema for Contact {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Phone", "E-mail"];
    const EXPORT_FILE_NAME: &'static str = "contacts_export.csv";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
        ]
    }

    fn from_row(row: &CsvRow<'_>) -> AssistantResult<ContactFields> {
        Ok(ContactFields::new(
            row.text("Name"),
            row.text("Phone"),
            row.text("E-mail"),
        ))
    }
}

impl CsvSchema for FinanceRecord {
    const HEADERS: &'static [&'static str] = &["ID", "Amount", "Category", "Date", "Description"];
    const EXPORT_FILE_NAME: &'static str = "finance_export.csv";

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.amount.to_string(),
            self.category.clone(),
            self.date.clone(),
            self.description.clone(),
        ]
    }

    fn from_row(row: &CsvRow<'_>) -> AssistantResult<FinanceFields> {
        let amount = match row.get("Amount") {
            Some(cell) => Money::parse(cell).map_err(|e| AssistantError::Format(e.to_string()))?,
            None => Money::zero(),
        };

        Ok(FinanceFields::new(
            amount,
            row.text("Category"),
            row.get("Date").map_or_else(today, str::to_string),
            row.text("Description"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn row_fields<R: CsvSchema>(headers: &[&str], cells: &[&str]) -> AssistantResult<R::Fields> {
        let headers = StringRecord::from(headers.to_vec());
        let record = StringRecord::from(cells.to_vec());
        R::from_row(&CsvRow::new(&headers, &record))
    }

    #[test]
    fn test_headers_match_row_width() {
        let note = Note::from_fields(RecordId::new(1), NoteFields::new("a", "b"));
        assert_eq!(note.to_row().len(), Note::HEADERS.len());

        let task = Task::from_fields(RecordId::new(1), TaskFields::new("a", "b"));
        assert_eq!(task.to_row().len(), Task::HEADERS.len());

        let contact = Contact::from_fields(RecordId::new(1), ContactFields::new("a", "b", "c"));
        assert_eq!(contact.to_row().len(), Contact::HEADERS.len());

        let record = FinanceRecord::from_fields(
            RecordId::new(1),
            FinanceFields::new(Money::zero(), "a", "01-01-2024", "b"),
        );
        assert_eq!(record.to_row().len(), FinanceRecord::HEADERS.len());
    }

    #[test]
    fn test_task_row_uses_status_label() {
        let mut task = Task::from_fields(RecordId::new(4), TaskFields::new("Pay rent", ""));
        assert_eq!(task.to_row()[3], "Not done");
        task.done = true;
        assert_eq!(task.to_row()[3], "Done");
    }

    #[test]
    fn test_task_defaults_for_missing_columns() {
        let fields = row_fields::<Task>(&["ID", "Name", "Description"], &["7", "Call", "bank"]).unwrap();
        assert_eq!(fields.title, "Call");
        assert!(!fields.done);
        assert_eq!(fields.priority, "Medium");
        assert_eq!(fields.due_date, None);
    }

    #[test]
    fn test_task_status_must_match_exactly() {
        let headers = ["Name", "Status"];
        assert!(row_fields::<Task>(&headers, &["a", "Done"]).unwrap().done);
        assert!(!row_fields::<Task>(&headers, &["a", "done"]).unwrap().done);
        assert!(!row_fields::<Task>(&headers, &["a", "Not done"]).unwrap().done);
    }

    #[test]
    fn test_finance_defaults() {
        let fields = row_fields::<FinanceRecord>(&["Category"], &["Food"]).unwrap();
        assert_eq!(fields.amount, Money::zero());
        assert_eq!(fields.date, today());
        assert_eq!(fields.description, "");
    }

    #[test]
    fn test_finance_malformed_amount() {
        let err = row_fields::<FinanceRecord>(&["Amount"], &["ten"]).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_headers_with_padding() {
        let fields =
            row_fields::<Contact>(&["ID", " Name", " Phone", " E-mail"], &["1", "Anna", "555", "a@x"])
                .unwrap();
        assert_eq!(fields.name, "Anna");
        assert_eq!(fields.email, "a@x");
    }
}
