//! Note CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_note_details, format_note_list};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Note, NoteFields, RecordId};
use crate::storage::Storage;

use super::{export_collection, import_collection, warn_unaudited};

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a new note
    Add {
        /// Note title
        title: String,
        /// Note text
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List all notes
    List,
    /// Show a note in full
    Show {
        /// Note ID
        id: RecordId,
    },
    /// Edit a note (the timestamp is refreshed)
    Edit {
        /// Note ID
        id: RecordId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New text
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: RecordId,
    },
    /// Export notes to CSV
    Export {
        /// Output file (defaults to notes_export.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import notes from CSV
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a note command
pub fn handle_note_command(
    storage: &Storage,
    settings: &Settings,
    cmd: NoteCommands,
) -> AssistantResult<()> {
    match cmd {
        NoteCommands::Add { title, content } => {
            let mut notes = storage.notes()?;
            let note = notes.create(NoteFields::new(title, content))?;
            warn_unaudited(&mut notes);
            println!("Created note #{}: {}", note.id, note.title);
        }

        NoteCommands::List => {
            let notes = storage.notes()?;
            println!("{}", format_note_list(notes.list()));
        }

        NoteCommands::Show { id } => {
            let notes = storage.notes()?;
            let note = notes
                .get(id)
                .ok_or_else(|| AssistantError::note_not_found(id.to_string()))?;
            print!("{}", format_note_details(note));
        }

        NoteCommands::Edit { id, title, content } => {
            let mut notes = storage.notes()?;
            let current = notes
                .get(id)
                .ok_or_else(|| AssistantError::note_not_found(id.to_string()))?;

            let fields = NoteFields::new(
                title.unwrap_or_else(|| current.title.clone()),
                content.unwrap_or_else(|| current.content.clone()),
            );
            let note = notes.update(id, fields)?;
            warn_unaudited(&mut notes);
            println!("Updated note #{}: {}", note.id, note.title);
        }

        NoteCommands::Delete { id } => {
            let mut notes = storage.notes()?;
            let note = notes.delete(id)?;
            warn_unaudited(&mut notes);
            println!("Deleted note #{}: {}", note.id, note.title);
        }

        NoteCommands::Export { output } => export_collection::<Note>(storage, settings, output)?,

        NoteCommands::Import { file } => import_collection::<Note>(storage, &file)?,
    }

    Ok(())
}
