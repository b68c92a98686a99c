//! Per-module records and their edit-buffer drafts.
//!
//! Every module follows the same shape: a record type with the shared
//! structural fields (id, closed-set status, owner label, creation
//! stamp) plus its own scalars, and a draft type holding the raw form
//! buffers for create/update flows.

pub mod client;
pub mod event;
pub mod member;
pub mod service;
pub mod team;
pub mod vendor;

use crate::{
    types::{RecordId, Timestamp},
    validate::ValidationError,
};

///
/// Record
///
/// A stored record. Ids are issued with the module's prefix and never
/// change after creation.
///

pub trait Record: Clone {
    const ID_PREFIX: &'static str;

    fn id(&self) -> &RecordId;
}

///
/// Draft
///
/// The edit buffer for one record type. Numeric and timestamp inputs
/// are raw strings because drafts model text-field buffers; `validate`
/// is the gate both submission paths run before any mutation.
///
/// `apply` rewrites every mutable field of an existing record. It must
/// not touch the id, the creation stamp, or the owner label.
///

pub trait Draft: Clone + Default {
    type Record: Record;

    /// Check the required fields, collecting every issue.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Build a fresh record from this buffer. Only called after
    /// `validate` has passed.
    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Self::Record;

    /// Rebuild the buffer from an existing record, for edit flows.
    fn from_record(record: &Self::Record) -> Self;

    /// Overwrite the record's mutable fields from this buffer.
    fn apply(&self, record: &mut Self::Record);
}
