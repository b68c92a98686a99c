//! Core runtime for opsboard: entity records and drafts, in-memory
//! collection stores, the list/create/show/update view lifecycle, and
//! the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

pub mod error;
pub mod manager;
pub mod model;
pub mod permissions;
pub mod schedule;
pub mod store;
pub mod types;
pub mod validate;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, generators, or validation helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        manager::{EntityManager, ViewState},
        model::{
            Draft, Record,
            client::{Client, ClientDraft, ClientStatus},
            event::{Event, EventDraft, EventStatus},
            member::{Member, MemberDraft, MemberStatus},
            service::{Service, ServiceDraft, ServiceStatus},
            team::{TeamMember, TeamMemberDraft},
            vendor::{Vendor, VendorDraft, VendorStatus},
        },
        permissions::{AccessLevel, PermissionSet},
        schedule::{SeedEvent, visible_events},
        store::Collection,
        types::{RecordId, Timestamp},
    };
}
