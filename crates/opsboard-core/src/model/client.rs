use crate::{
    model::{Draft, Record},
    types::{RecordId, Timestamp},
    validate::{self, FieldChecks, ValidationError},
};
use serde::{Deserialize, Serialize};

///
/// ClientStatus
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

///
/// Client
///
/// Agency client with a monthly retainer.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub monthly_retainer: f64,
    pub notes: String,
    pub status: ClientStatus,
    pub owner_label: String,
    pub created_at: Timestamp,
}

impl Record for Client {
    const ID_PREFIX: &'static str = "client";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

///
/// ClientDraft
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub monthly_retainer: String,
    pub notes: String,
    pub status: ClientStatus,
}

impl Draft for ClientDraft {
    type Record = Client;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .require_text("name", &self.name)
            .require_text("email", &self.email)
            .require_number("monthly_retainer", &self.monthly_retainer)
            .finish()
    }

    fn create(&self, id: RecordId, at: Timestamp, owner_label: &str) -> Client {
        Client {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            monthly_retainer: validate::number(&self.monthly_retainer).unwrap_or_default(),
            notes: self.notes.clone(),
            status: self.status,
            owner_label: owner_label.to_string(),
            created_at: at,
        }
    }

    fn from_record(record: &Client) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            company: record.company.clone(),
            monthly_retainer: record.monthly_retainer.to_string(),
            notes: record.notes.clone(),
            status: record.status,
        }
    }

    fn apply(&self, record: &mut Client) {
        record.name = self.name.clone();
        record.email = self.email.clone();
        record.phone = self.phone.clone();
        record.company = self.company.clone();
        record.monthly_retainer = validate::number(&self.monthly_retainer).unwrap_or_default();
        record.notes = self.notes.clone();
        record.status = self.status;
    }
}

///
/// TESTS
///
