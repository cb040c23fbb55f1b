//! Note store

use crate::models::Note;

use super::store::RecordStore;

/// Store of notes backed by notes.json
pub type NoteRepository = RecordStore<Note>;
