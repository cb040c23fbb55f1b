//! Contact CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_contact_details, format_contact_list};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, ContactFields, RecordId};
use crate::storage::Storage;

use super::{export_collection, import_collection, warn_unaudited};

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Create a new contact
    Add {
        /// Contact name
        name: String,
        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,
        /// E-mail address
        #[arg(short, long, default_value = "")]
        email: String,
    },
    /// List all contacts
    List,
    /// Find contacts by name (ignoring case) or phone fragment
    Find {
        /// Text to search for
        query: String,
    },
    /// Show a contact
    Show {
        /// Contact ID
        id: RecordId,
    },
    /// Edit a contact
    Edit {
        /// Contact ID
        id: RecordId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// New e-mail address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: RecordId,
    },
    /// Export contacts to CSV
    Export {
        /// Output file (defaults to contacts_export.csv in the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import contacts from CSV
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle a contact command
pub fn handle_contact_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ContactCommands,
) -> AssistantResult<()> {
    match cmd {
        ContactCommands::Add { name, phone, email } => {
            let mut contacts = storage.contacts()?;
            let contact = contacts.create(ContactFields::new(name, phone, email))?;
            warn_unaudited(&mut contacts);
            println!("Created contact #{}: {}", contact.id, contact.name);
        }

        ContactCommands::List => {
            let contacts = storage.contacts()?;
            let all: Vec<&Contact> = contacts.list().iter().collect();
            println!("{}", format_contact_list(&all));
        }

        ContactCommands::Find { query } => {
            let contacts = storage.contacts()?;
            println!("{}", format_contact_list(&contacts.find_by_text(&query)));
        }

        ContactCommands::Show { id } => {
            let contacts = storage.contacts()?;
            let contact = contacts
                .get(id)
                .ok_or_else(|| AssistantError::contact_not_found(id.to_string()))?;
            print!("{}", format_contact_details(contact));
        }

        ContactCommands::Edit {
            id,
            name,
            phone,
            email,
        } => {
            let mut contacts = storage.contacts()?;
            let current = contacts
                .get(id)
                .ok_or_else(|| AssistantError::contact_not_found(id.to_string()))?;

            let fields = ContactFields::new(
                name.unwrap_or_else(|| current.name.clone()),
                phone.unwrap_or_else(|| current.phone.clone()),
                email.unwrap_or_else(|| current.email.clone()),
            );
            let contact = contacts.update(id, fields)?;
            warn_unaudited(&mut contacts);
            println!("Updated contact #{}: {}", contact.id, contact.name);
        }

        ContactCommands::Delete { id } => {
            let mut contacts = storage.contacts()?;
            let contact = contacts.delete(id)?;
            warn_unaudited(&mut contacts);
            println!("Deleted contact #{}: {}", contact.id, contact.name);
        }

        ContactCommands::Export { output } => {
            export_collection::<Contact>(storage, settings, output)?
        }

        ContactCommands::Import { file } => import_collection::<Contact>(storage, &file)?,
    }

    Ok(())
}
