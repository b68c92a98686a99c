use crate::{model::Record, types::RecordId};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("duplicate record id: {id}")]
    DuplicateId { id: RecordId },

    #[error("record not found: {id}")]
    NotFound { id: RecordId },
}

///
/// Collection
///
/// Ordered in-memory collection for one module, newest-first. Session
/// state only: contents live for the process and are never persisted.
/// Single-threaded by design; last writer wins on update.
///

#[derive(Clone, Debug)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Prepend a record so list views read newest-first.
    ///
    /// A duplicate id is rejected; ids are unique within a collection
    /// and never reused.
    pub fn create(&mut self, record: T) -> Result<(), StoreError> {
        if self.get(record.id()).is_some() {
            return Err(StoreError::DuplicateId {
                id: record.id().clone(),
            });
        }

        tracing::debug!(id = %record.id(), module = T::ID_PREFIX, "record created");
        self.records.insert(0, record);

        Ok(())
    }

    /// Apply `patch` to the record with `id`, keeping its position.
    pub fn update(&mut self, id: &RecordId, patch: impl FnOnce(&mut T)) -> Result<&T, StoreError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return Err(StoreError::NotFound { id: id.clone() });
        };

        patch(record);
        tracing::debug!(id = %id, module = T::ID_PREFIX, "record updated");

        Ok(record)
    }

    /// Filter out the record with `id`, returning it if present.
    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let position = self.records.iter().position(|record| record.id() == id)?;
        tracing::debug!(id = %id, module = T::ID_PREFIX, "record removed");

        Some(self.records.remove(position))
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{
            Draft,
            client::{Client, ClientDraft},
        },
        types::{IdGenerator, Timestamp},
    };

    fn client(generator: &mut IdGenerator, name: &str) -> Client {
        let draft = ClientDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            monthly_retainer: "1000".to_string(),
            ..ClientDraft::default()
        };

        draft.create(
            generator.next_id(Client::ID_PREFIX).unwrap(),
            Timestamp::now(),
            "Northside Agency",
        )
    }

    #[test]
    fn create_prepends() {
        let mut generator = IdGenerator::new();
        let mut collection = Collection::new();

        collection.create(client(&mut generator, "First")).unwrap();
        collection.create(client(&mut generator, "Second")).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.all()[0].name, "Second");
        assert_eq!(collection.all()[1].name, "First");
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut generator = IdGenerator::new();
        let mut collection = Collection::new();
        let record = client(&mut generator, "Acme");

        collection.create(record.clone()).unwrap();
        let err = collection.create(record).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId { .. }));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn update_patches_in_place() {
        let mut generator = IdGenerator::new();
        let mut collection = Collection::new();
        let record = client(&mut generator, "Acme");
        let id = record.id().clone();
        collection.create(record).unwrap();

        let updated = collection
            .update(&id, |record| record.name = "Acme Corp".to_string())
            .unwrap();

        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(collection.get(&id).unwrap().name, "Acme Corp");
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut collection: Collection<Client> = Collection::new();
        let id = crate::types::RecordId::new("client_missing").unwrap();

        let err = collection.update(&id, |_| {}).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id });
    }

    #[test]
    fn remove_filters_out_by_id() {
        let mut generator = IdGenerator::new();
        let mut collection = Collection::new();
        let keep = client(&mut generator, "Keep");
        let drop = client(&mut generator, "Drop");
        let drop_id = drop.id().clone();
        collection.create(keep).unwrap();
        collection.create(drop).unwrap();

        let removed = collection.remove(&drop_id).unwrap();
        assert_eq!(removed.name, "Drop");
        assert_eq!(collection.len(), 1);
        assert!(collection.remove(&drop_id).is_none());
    }
}
