//! Note model

use serde::{Deserialize, Serialize};

use super::dates::now_timestamp;
use super::ids::RecordId;
use super::record::Record;
use crate::audit::EntityType;

/// A free-text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// `DD-MM-YYYY HH:MM:SS`, refreshed on creation and on every edit
    pub timestamp: String,
}

/// Note fields without the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

impl NoteFields {
    /// Fields for a new or edited note, stamped with the current time
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp: now_timestamp(),
        }
    }
}

impl Record for Note {
    type Fields = NoteFields;

    const ENTITY_TYPE: EntityType = EntityType::Note;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_fields(id: RecordId, fields: NoteFields) -> Self {
        Self {
            id,
            title: fields.title,
            content: fields.content,
            timestamp: fields.timestamp,
        }
    }

    fn apply(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.timestamp = fields.timestamp;
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn touch(&mut self) {
        self.timestamp = now_timestamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_names() {
        let note = Note::from_fields(RecordId::new(1), NoteFields::new("Groceries", "milk"));
        let value = serde_json::to_value(&note).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["content", "id", "timestamp", "title"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"id":1,"title":"a","content":"b","timestamp":"01-01-2024 10:00:00","extra":1}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }
}
