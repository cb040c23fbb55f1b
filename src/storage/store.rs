//! Generic record store
//!
//! A `RecordStore<R>` owns the ordered collection of one record schema,
//! loaded from its snapshot file at construction. Every mutation is staged on
//! a copy of the collection, written to disk in full, and only then committed
//! in memory, so a failed write leaves both memory and file untouched.
//!
//! Audit entries are written after the commit. A failed audit write does not
//! undo or fail the mutation; it is kept for the caller to report through
//! [`RecordStore::take_audit_error`].

use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Record, RecordId};

use super::file_io;

/// Persistent, ordered collection of records of one schema
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    path: PathBuf,
    records: Vec<R>,
    audit: Option<AuditLogger>,
    audit_error: Option<AssistantError>,
}

impl<R: Record> RecordStore<R> {
    /// Open the store backed by `path`, creating an empty snapshot if absent
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the snapshot exists but does not hold a valid
    /// collection, or `Io` if it cannot be read or created.
    pub fn open(path: impl Into<PathBuf>) -> AssistantResult<Self> {
        let path = path.into();
        let records: Vec<R> = file_io::load(&path, Vec::new())?;
        check_ids(&records, &path)?;

        Ok(Self {
            path,
            records,
            audit: None,
            audit_error: None,
        })
    }

    /// Attach an audit logger that records every committed mutation
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next created record will receive
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the collection already holds the largest id.
    pub fn next_id(&self) -> AssistantResult<RecordId> {
        allocate_id(&self.records, &self.path)
    }

    /// Take the error of the last audit write that failed, if any
    ///
    /// The mutation that triggered it was committed regardless.
    pub fn take_audit_error(&mut self) -> Option<AssistantError> {
        self.audit_error.take()
    }

    /// Create a record from its fields, assigning the next id
    pub fn create(&mut self, fields: R::Fields) -> AssistantResult<R> {
        let mut record = R::from_fields(self.next_id()?, fields);
        record.touch();

        let mut staged = self.records.clone();
        staged.push(record.clone());
        self.commit(staged)?;

        self.log(&[AuditEntry::created(&record)]);

        Ok(record)
    }

    /// All records in stored order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Records matching `predicate`, in stored order
    pub fn list_where<P>(&self, mut predicate: P) -> Vec<&R>
    where
        P: FnMut(&R) -> bool,
    {
        self.records.iter().filter(|r| predicate(*r)).collect()
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Overwrite all mutable fields of a record
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id; the collection is unchanged.
    pub fn update(&mut self, id: RecordId, fields: R::Fields) -> AssistantResult<R> {
        self.modify(id, |record| {
            record.apply(fields);
            record.touch();
        })
    }

    /// Apply an in-place change to one record and persist it
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id; the collection is unchanged.
    pub fn modify<F>(&mut self, id: RecordId, change: F) -> AssistantResult<R>
    where
        F: FnOnce(&mut R),
    {
        let index = self.index_of(id)?;
        let before = self.records[index].clone();

        let mut staged = self.records.clone();
        change(&mut staged[index]);
        let after = staged[index].clone();
        self.commit(staged)?;

        self.log(&[AuditEntry::updated(&before, &after)]);

        Ok(after)
    }

    /// Remove a record
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id; the collection is unchanged.
    pub fn delete(&mut self, id: RecordId) -> AssistantResult<R> {
        let index = self.index_of(id)?;

        let mut staged = self.records.clone();
        let removed = staged.remove(index);
        self.commit(staged)?;

        self.log(&[AuditEntry::deleted(&removed)]);

        Ok(removed)
    }

    /// Append a batch of records, allocating a fresh id for each, and persist once
    ///
    /// Unlike `create`, records keep their fields exactly as given.
    pub fn append_all(&mut self, batch: Vec<R::Fields>) -> AssistantResult<Vec<R>> {
        let mut staged = self.records.clone();
        let mut added = Vec::with_capacity(batch.len());

        for fields in batch {
            let record = R::from_fields(allocate_id(&staged, &self.path)?, fields);
            staged.push(record.clone());
            added.push(record);
        }

        self.commit(staged)?;

        let entries: Vec<_> = added.iter().map(AuditEntry::created).collect();
        self.log(&entries);

        Ok(added)
    }

    fn index_of(&self, id: RecordId) -> AssistantResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| AssistantError::not_found(R::ENTITY_TYPE.name(), id.to_string()))
    }

    /// Persist the staged collection, then make it current
    fn commit(&mut self, staged: Vec<R>) -> AssistantResult<()> {
        file_io::save(&self.path, &staged)?;
        self.records = staged;
        Ok(())
    }

    /// Record committed mutations; failures are kept, not returned
    fn log(&mut self, entries: &[AuditEntry]) {
        let result = match &self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        };
        if let Err(err) = result {
            self.audit_error = Some(err);
        }
    }
}

fn allocate_id<R: Record>(records: &[R], path: &Path) -> AssistantResult<RecordId> {
    RecordId::allocate(records.iter().map(Record::id)).ok_or_else(|| {
        AssistantError::Parse(format!("No ids left for new records in {}", path.display()))
    })
}

fn check_ids<R: Record>(records: &[R], path: &Path) -> AssistantResult<()> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if record.id() == RecordId::MAX {
            return Err(AssistantError::Parse(format!(
                "Id {} in {} leaves no room for new records",
                record.id(),
                path.display()
            )));
        }
        if !seen.insert(record.id()) {
            return Err(AssistantError::Parse(format!(
                "Duplicate id {} in {}",
                record.id(),
                path.display()
            )));
        }
    }
    Ok(())
}
