//! The schema contract shared by every record collection
//!
//! A record type describes its mutable field set, how a full record is built
//! from those fields plus a store-assigned id, and how an edit is applied.
//! The generic record store is written purely against this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ids::RecordId;
use crate::audit::EntityType;

/// A record schema held by a [`RecordStore`](crate::storage::RecordStore)
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Every field of the record except its id
    type Fields: Clone;

    /// Entity type recorded in the audit log and in error messages
    const ENTITY_TYPE: EntityType;

    /// The store-assigned id
    fn id(&self) -> RecordId;

    /// Build a full record from an allocated id and its fields
    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;

    /// Overwrite all mutable fields
    fn apply(&mut self, fields: Self::Fields);

    /// Short human-readable label (title, name, ...) for logs and listings
    fn label(&self) -> String;

    /// Hook run after `create` and `update`, but not on import.
    fn touch(&mut self) {}
}
