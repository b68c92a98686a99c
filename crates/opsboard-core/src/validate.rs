use crate::types::Timestamp;
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// ValidationIssue
///
/// One failed field check, by field name.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, ThisError)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationIssue {
    #[error("{field} is required")]
    MissingText { field: &'static str },

    #[error("{field} must be a non-zero number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must be an ISO-8601 timestamp")]
    InvalidTimestamp { field: &'static str },
}

impl ValidationIssue {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingText { field }
            | Self::InvalidNumber { field }
            | Self::InvalidTimestamp { field } => field,
        }
    }
}

///
/// ValidationError
///
/// Validation is non-failing at the field level. All issues are
/// collected and returned together so the caller can decide how to
/// surface them.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, ThisError)]
#[error("validation failed on {} field(s)", issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field() == field)
    }
}

/// Trimmed non-empty text, or `None`.
#[must_use]
pub fn text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();

    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a form buffer as a required number.
///
/// Finite and non-zero. Zero is rejected on purpose: the forms this
/// models treat a falsy number as "not filled in", so a price or
/// retainer of `0` blocks submission.
#[must_use]
pub fn number(raw: &str) -> Option<f64> {
    let parsed: f64 = raw.trim().parse().ok()?;

    (parsed.is_finite() && parsed != 0.0).then_some(parsed)
}

/// Parse a form buffer as a required RFC 3339 timestamp.
#[must_use]
pub fn timestamp(raw: &str) -> Option<Timestamp> {
    Timestamp::parse(raw.trim()).ok()
}

///
/// FieldChecks
///
/// Accumulates issues across a whole form, then reports them all.
///

#[derive(Debug, Default)]
pub struct FieldChecks {
    issues: Vec<ValidationIssue>,
}

impl FieldChecks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_text(&mut self, field: &'static str, raw: &str) -> &mut Self {
        if text(raw).is_none() {
            self.issues.push(ValidationIssue::MissingText { field });
        }

        self
    }

    pub fn require_number(&mut self, field: &'static str, raw: &str) -> &mut Self {
        if number(raw).is_none() {
            self.issues.push(ValidationIssue::InvalidNumber { field });
        }

        self
    }

    pub fn require_timestamp(&mut self, field: &'static str, raw: &str) -> &mut Self {
        if timestamp(raw).is_none() {
            self.issues.push(ValidationIssue::InvalidTimestamp { field });
        }

        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            return Ok(());
        }

        Err(ValidationError {
            issues: std::mem::take(&mut self.issues),
        })
    }
}

///
/// TESTS
///
