use crate::{
    model::{Draft, Record},
    types::{RecordId, Timestamp},
    validate::{self, FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// EventStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

///
/// Event
///
/// One event on a business or organizer schedule. `start` drives the
/// ordering of the merged seed/dynamic listing.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: Timestamp,
    pub status: EventStatus,
    pub owner_label: String,
    pub created_at: Timestamp,
}

impl Record for Event {
    const ID_PREFIX: &'static str = "event";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// EventDraft
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: String,
    pub status: EventStatus,
}

impl Draft for EventDraft {
    type Record = Event;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("title", &self.title)
            .require_timestamp("start", &self.start)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Event {
        Event {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start: validate::timestamp(&self.start).unwrap_or(at),
            status: self.status,
            owner_label: owner_label.to_string(),
            created_at: at,
        }
    }

    fn from_record(record: &Event) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            start: record.start.to_string(),
            status: record.status,
        }
    }

    fn apply(&self, record: &mut Event) {
        record.title = self.title.clone();
        record.description = self.description.clone();
        record.location = self.location.clone();
        if let Some(start) = validate::timestamp(&self.start) {
            record.start = start;
        }
        record.status = self.status;
    }
}

///
/// TESTS
///
