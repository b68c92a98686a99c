use crate::{
    model::{Draft, Record},
    permissions::{AccessLevel, PermissionSet},
    store::{Collection, StoreError},
    types::{RecordId, Timestamp},
    validate::{FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// TeamMember
///
/// Organizer team staff. Permissions are derived from the access level
/// once, at creation; later edits to the access level leave them
/// untouched, and only the wholesale override below replaces them.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role_title: String,
    pub access_level: AccessLevel,
    pub permissions: PermissionSet,
    pub owner_label: String,
    pub joined_at: Timestamp,
}

impl Record for TeamMember {
    const ID_PREFIX: &'static str = "team";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// TeamMemberDraft
///
/// No permissions buffer: the create path derives them and the update
/// path must not rewrite them.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TeamMemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role_title: String,
    pub access_level: AccessLevel,
}

impl Draft for TeamMemberDraft {
    type Record = TeamMember;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("name", &self.name)
            .require_text("email", &self.email)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> TeamMember {
        TeamMember {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role_title: self.role_title.clone(),
            access_level: self.access_level,
            permissions: PermissionSet::for_level(self.access_level),
            owner_label: owner_label.to_string(),
            joined_at: at,
        }
    }

    fn from_record(record: &TeamMember) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            role_title: record.role_title.clone(),
            access_level: record.access_level,
        }
    }

    fn apply(&self, record: &mut TeamMember) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.phone = self.phone.clone();
        record.role_title = self.role_title.clone();
        // access level changes do not re-derive permissions
        record.access_level = self.access_level;
    }
}

impl Collection<TeamMember> {
    /// Replace a member's permission set wholesale.
    ///
    /// Callers pass a complete set, typically seeded from the member's
    /// current flags and toggled, or from the select-all / clear-all
    /// helpers. There is no per-flag merge.
    pub fn set_permissions(
        &mut self,
        id: &RecordId,
        permissions: PermissionSet,
    ) -> Result<&TeamMember, StoreError> {
        self.update(id, |member| member.permissions = permissions)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdGenerator;

    fn member(access_level: AccessLevel) -> TeamMember {
        let draft = TeamMemberDraft {
            name: "Jordan Vega".to_string(),
            email: "jordan@riverside.org".to_string(),
            access_level,
            ..TeamMemberDraft::default()
        };

        draft.create(
            IdGenerator::new().next_id(TeamMember::ID_PREFIX).unwrap(),
            Timestamp::now(),
            "Riverside Events",
        )
    }

    #[test]
    fn create_derives_permissions_from_access_level() {
        assert_eq!(
            member(AccessLevel::Manager).permissions,
            PermissionSet::for_level(AccessLevel::Manager)
        );
    }

    #[test]
    fn changing_access_level_keeps_permissions() {
        let mut record = member(AccessLevel::Admin);

        let demoted = TeamMemberDraft {
            access_level: AccessLevel::Volunteer,
            ..TeamMemberDraft::from_record(&record)
        };
        demoted.apply(&mut record);

        assert_eq!(record.access_level, AccessLevel::Volunteer);
        assert_eq!(record.permissions, PermissionSet::all());
    }

    #[test]
    fn override_replaces_the_whole_set() {
        let mut collection = Collection::new();
        let record = member(AccessLevel::Staff);
        let id = record.id().clone();
        collection.create(record).unwrap();

        let next = PermissionSet {
            view_reports: true,
            ..PermissionSet::none()
        };
        let updated = collection.set_permissions(&id, next).unwrap();

        // manage_events from the staff default is gone: no per-flag merge
        assert!(!updated.permissions.manage_events);
        assert!(updated.permissions.view_reports);
        assert_eq!(updated.permissions.granted_count(), 1);
    }

    #[test]
    fn override_missing_member_is_not_found() {
        let mut collection: Collection<TeamMember> = Collection::new();
        let id = RecordId::new("team_missing").unwrap();

        let err = collection
            .set_permissions(&id, PermissionSet::all())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
