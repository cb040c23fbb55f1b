//! Record identifiers
//!
//! Every record carries a positive integer id assigned by its store. The
//! newtype keeps ids from being confused with counts or row indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The largest id a store will hold
    pub const MAX: RecordId = RecordId(u64::MAX);

    /// The id following this one, or `None` past [`RecordId::MAX`]
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Allocate the next id for a collection: `max(existing, 0) + 1`
    ///
    /// A deleted maximum id is handed out again by the next allocation;
    /// any other deleted id stays retired. Returns `None` once the id space
    /// is used up.
    pub fn allocate<I>(existing: I) -> Option<Self>
    where
        I: IntoIterator<Item = RecordId>,
    {
        existing
            .into_iter()
            .max()
            .unwrap_or(RecordId(0))
            .checked_next()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
