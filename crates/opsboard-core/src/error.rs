use crate::{
    manager::FlowError,
    store::StoreError,
    types::{IdError, TimestampError},
    validate::ValidationError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error for callers that cross module boundaries, such as
/// the dashboard assemblies. Inside the core each module keeps its own
/// error type; this is only the composition.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}
