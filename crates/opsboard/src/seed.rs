//! Baseline schedules present at dashboard load, independent of any
//! user-created records.

use opsboard_core::{
    model::event::EventStatus,
    schedule::SeedEvent,
    types::{RecordId, Timestamp},
};

const BUSINESS_SCHEDULE: &[(&str, &str, &str, &str)] = &[
    (
        "event_seed_showcase",
        "Spring Product Showcase",
        "Harbor Convention Center",
        "2026-03-20T09:00:00Z",
    ),
    (
        "event_seed_mixer",
        "Quarterly Client Mixer",
        "Rooftop Lounge",
        "2026-04-14T18:00:00Z",
    ),
];

const ORGANIZER_SCHEDULE: &[(&str, &str, &str, &str)] = &[
    (
        "event_seed_gala",
        "Founders Gala",
        "Grand Ballroom",
        "2026-05-02T19:00:00Z",
    ),
    (
        "event_seed_fair",
        "Community Vendor Fair",
        "Riverside Park",
        "2026-06-13T10:00:00Z",
    ),
    (
        "event_seed_retro",
        "Season Wrap Retrospective",
        "Main Hall",
        "2026-09-05T16:00:00Z",
    ),
];

/// Seed schedule for the business dashboard.
#[must_use]
pub fn business_schedule() -> Vec<SeedEvent> {
    build(BUSINESS_SCHEDULE)
}

/// Seed schedule for the event organizer dashboard.
#[must_use]
pub fn organizer_schedule() -> Vec<SeedEvent> {
    build(ORGANIZER_SCHEDULE)
}

fn build(table: &[(&str, &str, &str, &str)]) -> Vec<SeedEvent> {
    table
        .iter()
        .map(|(id, title, location, start)| {
            // static tables above; both parses hold by construction
            let start = Timestamp::parse(start).expect("seed start is valid RFC 3339");

            SeedEvent {
                id: RecordId::new(*id).expect("seed id is non-empty"),
                title: (*title).to_string(),
                description: String::new(),
                location: (*location).to_string(),
                start,
                status: EventStatus::Confirmed,
                created_at: start,
            }
        })
        .collect()
}

///
/// TESTS
///
