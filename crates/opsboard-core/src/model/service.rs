use crate::{
    model::{Draft, Record},
    types::{RecordId, Timestamp},
    validate::{self, FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// ServiceStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    #[default]
    Available,
    Booked,
    Unavailable,
}

///
/// Service
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub status: ServiceStatus,
    pub owner_label: String,
    pub created_at: Timestamp,
}

impl Record for Service {
    const ID_PREFIX: &'static str = "service";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// ServiceDraft
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub status: ServiceStatus,
}

impl Draft for ServiceDraft {
    type Record = Service;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("name", &self.name)
            .require_number("price", &self.price)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Service {
        Service {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: validate::number(&self.price).unwrap_or_default(),
            status: self.status,
            owner_label: owner_label.to_string(),
            created_at: at,
        }
    }

    fn from_record(record: &Service) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            category: record.category.clone(),
            price: record.price.to_string(),
            status: record.status,
        }
    }

    fn apply(&self, record: &mut Service) {
        record.name = self.name.clone();
        record.description = self.description.clone();
        record.category = self.category.clone();
        record.price = validate::number(&self.price).unwrap_or_default();
        record.status = self.status;
    }
}

///
/// TESTS
///
