use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use ulid::Ulid;

///
/// IdError
///

#[derive(Debug, ThisError)]
pub enum IdError {
    #[error("record id cannot be empty")]
    Empty,

    #[error("monotonic error - overflow")]
    GeneratorOverflow,
}

///
/// RecordId
///
/// Identifier unique within one collection, rendered `{prefix}_{ulid}`.
/// The prefix names the owning module so ids stay self-describing in
/// logs and seed data. Immutable after creation.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdError::Empty);
        }

        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Module prefix portion, if the id follows the `{prefix}_{suffix}` shape.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once('_').map(|(prefix, _)| prefix)
    }
}

///
/// IdGenerator
///
/// Stateful monotonic generator; it keeps the previously issued ULID so
/// two calls within the same millisecond increment instead of colliding.
/// Replaces the `{prefix}_{nowMillis}` scheme whose same-millisecond
/// collisions were a known weakness.
///

#[derive(Debug)]
pub struct IdGenerator {
    previous: Ulid,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: Ulid::nil(),
        }
    }

    /// Issue the next id for `prefix`.
    pub fn next_id(&mut self, prefix: &str) -> Result<RecordId, IdError> {
        let candidate = Ulid::new();

        // maybe time went backward, or it is the same ms.
        // increment instead of taking the new random so order is maintained
        let ulid = if candidate <= self.previous {
            self.previous
                .increment()
                .ok_or(IdError::GeneratorOverflow)?
        } else {
            candidate
        };
        self.previous = ulid;

        RecordId::new(format!("{prefix}_{ulid}"))
    }
}

///
/// TESTS
///
