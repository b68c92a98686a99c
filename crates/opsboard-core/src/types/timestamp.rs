use serde::{Deserialize, Serialize, Serializer, de::Deserializer};
use std::fmt;
use thiserror::Error as ThisError;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// TimestampError
///

#[derive(Debug, ThisError)]
pub enum TimestampError {
    #[error("invalid ISO-8601 timestamp: {raw}")]
    InvalidString { raw: String },
}

///
/// Timestamp
///
/// UTC instant that renders and serializes as an ISO-8601 (RFC 3339)
/// string. Chronological `Ord` matches the lexicographic order of the
/// rendered strings, which is what the schedule merge sorts by.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse an RFC 3339 string, e.g. `2026-03-20T09:00:00Z`.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        OffsetDateTime::parse(raw, &Rfc3339)
            .map(Self)
            .map_err(|_| TimestampError::InvalidString {
                raw: raw.to_string(),
            })
    }

    #[must_use]
    pub const fn from_datetime(datetime: OffsetDateTime) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub const fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;

        write!(f, "{rendered}")
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
