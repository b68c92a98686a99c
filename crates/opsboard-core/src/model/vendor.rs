use crate::{
    model::{Draft, Record},
    types::{RecordId, Timestamp},
    validate::{FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// VendorStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
}

///
/// Vendor
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Vendor {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub notes: String,
    pub status: VendorStatus,
    pub owner_label: String,
    pub created_at: Timestamp,
}

impl Record for Vendor {
    const ID_PREFIX: &'static str = "vendor";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// VendorDraft
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VendorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub notes: String,
    pub status: VendorStatus,
}

impl Draft for VendorDraft {
    type Record = Vendor;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("name", &self.name)
            .require_text("email", &self.email)
            .require_text("category", &self.category)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Vendor {
        Vendor {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            category: self.category.clone(),
            notes: self.notes.clone(),
            status: self.status,
            owner_label: owner_label.to_string(),
            created_at: at,
        }
    }

    fn from_record(record: &Vendor) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            category: record.category.clone(),
            notes: record.notes.clone(),
            status: record.status,
        }
    }

    fn apply(&self, record: &mut Vendor) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.phone = self.phone.clone();
        record.category = self.category.clone();
        record.notes = self.notes.clone();
        record.status = self.status;
    }
}
