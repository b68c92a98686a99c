//! Role-scoped dashboard assemblies.
//!
//! Each dashboard owns one `EntityManager` per module, all labelled
//! with the same owning entity. The session guard that resolves that
//! entity is outside this crate; callers hand over the resolved
//! `OwnerContext`.

use crate::seed;
use opsboard_core::{
    error::Error,
    manager::EntityManager,
    model::{
        client::ClientDraft,
        event::{Event, EventDraft},
        member::MemberDraft,
        service::ServiceDraft,
        team::{TeamMember, TeamMemberDraft},
        vendor::{Vendor, VendorDraft},
    },
    permissions::PermissionSet,
    schedule::{SeedEvent, visible_events},
    types::RecordId,
};
use serde::{Deserialize, Serialize};

///
/// OwnerContext
///
/// The concrete owning entity a session resolved to: an agency, a
/// business/brand, a community, or an event organizer. Only the
/// display label crosses into the core.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OwnerContext {
    pub label: String,
}

impl OwnerContext {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

///
/// AgencyDashboard
///

pub struct AgencyDashboard {
    pub clients: EntityManager<ClientDraft>,
    pub services: EntityManager<ServiceDraft>,
}

impl AgencyDashboard {
    #[must_use]
    pub fn new(owner: &OwnerContext) -> Self {
        Self {
            clients: EntityManager::new(&owner.label),
            services: EntityManager::new(&owner.label),
        }
    }
}

///
/// BusinessDashboard
///
/// Brand-side view: the event schedule (seeded) plus vendors. The
/// overview is the one place record removal is surfaced.
///

pub struct BusinessDashboard {
    pub events: EntityManager<EventDraft>,
    pub vendors: EntityManager<VendorDraft>,
    seed: Vec<SeedEvent>,
}

impl BusinessDashboard {
    #[must_use]
    pub fn new(owner: &OwnerContext) -> Self {
        Self {
            events: EntityManager::new(&owner.label),
            vendors: EntityManager::new(&owner.label),
            seed: seed::business_schedule(),
        }
    }

    /// The merged seed + user-created schedule, recomputed per call.
    #[must_use]
    pub fn schedule(&self) -> Vec<Event> {
        visible_events(&self.seed, self.events.records(), self.events.owner_label())
    }

    /// Overview removal: filter a vendor out by id.
    pub fn remove_vendor(&mut self, id: &RecordId) -> Option<Vendor> {
        self.vendors.remove(id)
    }
}

///
/// CommunityDashboard
///

pub struct CommunityDashboard {
    pub members: EntityManager<MemberDraft>,
}

impl CommunityDashboard {
    #[must_use]
    pub fn new(owner: &OwnerContext) -> Self {
        Self {
            members: EntityManager::new(&owner.label),
        }
    }
}

///
/// OrganizerDashboard
///
/// Organizer-side view: the seeded schedule, vendors, and the team
/// roster with its permission override.
///

pub struct OrganizerDashboard {
    pub events: EntityManager<EventDraft>,
    pub vendors: EntityManager<VendorDraft>,
    pub team: EntityManager<TeamMemberDraft>,
    seed: Vec<SeedEvent>,
}

impl OrganizerDashboard {
    #[must_use]
    pub fn new(owner: &OwnerContext) -> Self {
        Self {
            events: EntityManager::new(&owner.label),
            vendors: EntityManager::new(&owner.label),
            team: EntityManager::new(&owner.label),
            seed: seed::organizer_schedule(),
        }
    }

    /// The merged seed + user-created schedule, recomputed per call.
    #[must_use]
    pub fn schedule(&self) -> Vec<Event> {
        visible_events(&self.seed, self.events.records(), self.events.owner_label())
    }

    /// Replace a team member's permission set wholesale.
    pub fn set_permissions(
        &mut self,
        id: &RecordId,
        permissions: PermissionSet,
    ) -> Result<TeamMember, Error> {
        let member = self
            .team
            .collection_mut()
            .set_permissions(id, permissions)?;

        Ok(member.clone())
    }
}

///
/// TESTS
///
