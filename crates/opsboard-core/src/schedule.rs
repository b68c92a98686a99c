use crate::{
    model::event::{Event, EventStatus},
    types::{RecordId, Timestamp},
};
use serde::{Deserialize, Serialize};

///
/// SeedEvent
///
/// Hard-coded baseline event present at module load, independent of
/// user-created records. Structurally identical to `Event` minus the
/// owner label, which is stamped on at merge time.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SeedEvent {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: Timestamp,
    pub status: EventStatus,
    pub created_at: Timestamp,
}

impl SeedEvent {
    /// Promote the seed to a full event owned by `owner_label`.
    #[must_use]
    pub fn stamp(&self, owner_label: &str) -> Event {
        Event {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start: self.start,
            status: self.status,
            owner_label: owner_label.to_string(),
            created_at: self.created_at,
        }
    }
}

/// The merged schedule a listing renders: user-created events first,
/// then the stamped seeds, stably sorted by ascending start time so
/// ties keep that dynamic-then-seed order.
///
/// Recomputed on every call; nothing is memoized. The inputs are
/// demo-scale, so the sort per read is fine.
#[must_use]
pub fn visible_events(seed: &[SeedEvent], dynamic: &[Event], owner_label: &str) -> Vec<Event> {
    let mut merged = dynamic.to_vec();
    merged.extend(seed.iter().map(|event| event.stamp(owner_label)));
    merged.sort_by(|a, b| a.start.cmp(&b.start));

    merged
}

///
/// TESTS
///
