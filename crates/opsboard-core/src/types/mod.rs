pub mod id;
pub mod timestamp;

pub use id::{IdError, IdGenerator, RecordId};
pub use timestamp::{Timestamp, TimestampError};
