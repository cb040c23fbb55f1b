//! Contact display formatting

use tabled::Tabled;

use super::render_table;
use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "E-mail")]
    email: String,
}

/// Format a list of contacts as a table
pub fn format_contact_list(contacts: &[&Contact]) -> String {
    let rows = contacts
        .iter()
        .map(|contact| ContactRow {
            id: contact.id.to_string(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        })
        .collect();

    render_table(rows, "No contacts found.")
}

pub fn format_contact_details(contact: &Contact) -> String {
    format!(
        "Contact #{}: {}\nPhone:  {}\nE-mail: {}\n",
        contact.id, contact.name, contact.phone, contact.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactFields, Record, RecordId};

    #[test]
    fn test_contact_list() {
        let contact = Contact::from_fields(
            RecordId::new(2),
            ContactFields::new("Anna", "555-0100", "anna@example.com"),
        );
        let output = format_contact_list(&[&contact]);
        assert!(output.contains("E-mail"));
        assert!(output.contains("anna@example.com"));
    }
}
