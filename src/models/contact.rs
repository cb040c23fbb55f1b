//! Contact model

use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::record::Record;
use crate::audit::EntityType;

/// An address-book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Case-insensitive substring match on the name, or exact substring match on the phone
    pub fn matches_text(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}

/// Contact fields without the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl Record for Contact {
    type Fields = ContactFields;

    const ENTITY_TYPE: EntityType = EntityType::Contact;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_fields(id: RecordId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.phone = fields.phone;
        self.email = fields.email;
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
