//! Note display formatting

use tabled::Tabled;

use super::{render_table, truncate};
use crate::models::Note;

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Content")]
    content: String,
    #[tabled(rename = "Date")]
    timestamp: String,
}

/// Format a list of notes as a table
pub fn format_note_list(notes: &[Note]) -> String {
    let rows = notes
        .iter()
        .map(|note| NoteRow {
            id: note.id.to_string(),
            title: note.title.clone(),
            content: truncate(&note.content, 40),
            timestamp: note.timestamp.clone(),
        })
        .collect();

    render_table(rows, "No notes found.")
}

/// Format a single note in full
pub fn format_note_details(note: &Note) -> String {
    format!(
        "Note #{}: {}\nDate: {}\n\n{}\n",
        note.id, note.title, note.timestamp, note.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteFields, Record, RecordId};

    #[test]
    fn test_note_list() {
        let note = Note::from_fields(RecordId::new(3), NoteFields::new("Groceries", "milk"));
        let output = format_note_list(&[note]);
        assert!(output.contains("Title"));
        assert!(output.contains("Groceries"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_note_list(&[]), "No notes found.");
    }
}
