use crate::{
    model::{Draft, Record},
    types::{RecordId, Timestamp},
    validate::{FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// MemberStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

///
/// Member
///
/// Community member. Uses `joined_at` rather than `created_at` as its
/// creation stamp; it is set once and never mutated.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interests: String,
    pub status: MemberStatus,
    pub owner_label: String,
    pub joined_at: Timestamp,
}

impl Record for Member {
    const ID_PREFIX: &'static str = "member";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// MemberDraft
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interests: String,
    pub status: MemberStatus,
}

impl Draft for MemberDraft {
    type Record = Member;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("name", &self.name)
            .require_text("email", &self.email)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Member {
        Member {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            interests: self.interests.clone(),
            status: self.status,
            owner_label: owner_label.to_string(),
            joined_at: at,
        }
    }

    fn from_record(record: &Member) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            interests: record.interests.clone(),
            status: record.status,
        }
    }

    fn apply(&self, record: &mut Member) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.phone = self.phone.clone();
        record.interests = self.interests.clone();
        record.status = self.status;
    }
}
