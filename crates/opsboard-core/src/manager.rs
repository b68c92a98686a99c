use crate::{
    model::{Draft, Record},
    store::{Collection, StoreError},
    types::{IdError, IdGenerator, RecordId, Timestamp},
    validate::ValidationError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ViewState
///
/// Which of the four module views is showing. Session-scoped; there is
/// no terminal state.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    List,
    Create,
    Show,
    Update,
}

///
/// FlowError
///
/// Outcome of a lifecycle action that did not mutate anything. The
/// original UI absorbed these silently; here the manager still stays on
/// (or returns to) the view the original would show, but the outcome is
/// returned so callers and tests can inspect it.
///

#[derive(Debug, ThisError)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Id(#[from] IdError),

    #[error("action not available from the {state:?} view")]
    State { state: ViewState },
}

///
/// EntityManager
///
/// One module's record lifecycle: the collection, the view-state
/// machine, the currently selected record, and the live draft buffer.
///
/// All mutation is atomic at submit time; cancelling a create or an
/// edit discards the buffer without touching the collection. Selecting
/// a record (and beginning an edit) resynchronizes the buffer from that
/// record, so buffers never leak across selections.
///

pub struct EntityManager<D: Draft> {
    collection: Collection<D::Record>,
    view: ViewState,
    selected: Option<RecordId>,
    draft: D,
    ids: IdGenerator,
    owner_label: String,
}

impl<D: Draft> EntityManager<D> {
    #[must_use]
    pub fn new(owner_label: impl Into<String>) -> Self {
        Self {
            collection: Collection::new(),
            view: ViewState::List,
            selected: None,
            draft: D::default(),
            ids: IdGenerator::new(),
            owner_label: owner_label.into(),
        }
    }

    #[must_use]
    pub const fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn owner_label(&self) -> &str {
        &self.owner_label
    }

    #[must_use]
    pub fn records(&self) -> &[D::Record] {
        self.collection.all()
    }

    #[must_use]
    pub const fn collection(&self) -> &Collection<D::Record> {
        &self.collection
    }

    /// Direct access for module-specific operations (removal where the
    /// module supports it, permission overrides on team rosters).
    pub const fn collection_mut(&mut self) -> &mut Collection<D::Record> {
        &mut self.collection
    }

    /// The currently selected record, if the view has one.
    #[must_use]
    pub fn selected(&self) -> Option<&D::Record> {
        self.collection.get(self.selected.as_ref()?)
    }

    /// The live form buffer.
    #[must_use]
    pub const fn draft(&self) -> &D {
        &self.draft
    }

    /// Mutable form buffer, for field edits while in create or update.
    pub const fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// `list -> create` with a cleared buffer.
    pub fn begin_create(&mut self) -> Result<(), FlowError> {
        self.expect_view(ViewState::List)?;

        self.draft = D::default();
        self.view = ViewState::Create;

        Ok(())
    }

    /// `list -> show`, remembering the selection and resynchronizing
    /// the buffer from it.
    pub fn select(&mut self, id: &RecordId) -> Result<(), FlowError> {
        self.expect_view(ViewState::List)?;

        let Some(record) = self.collection.get(id) else {
            return Err(StoreError::NotFound { id: id.clone() }.into());
        };

        self.draft = D::from_record(record);
        self.selected = Some(id.clone());
        self.view = ViewState::Show;

        Ok(())
    }

    /// `show -> update`; the buffer is rebuilt from the selected record
    /// so stale edits never survive.
    pub fn begin_edit(&mut self) -> Result<(), FlowError> {
        self.expect_view(ViewState::Show)?;

        if let Some(record) = self.selected() {
            self.draft = D::from_record(record);
        }
        self.view = ViewState::Update;

        Ok(())
    }

    /// `show -> list`, clearing the selection.
    pub fn close(&mut self) -> Result<(), FlowError> {
        self.expect_view(ViewState::Show)?;
        self.reset_to_list();

        Ok(())
    }

    /// `create|update -> list` with no mutation. Declining a
    /// confirmation prompt routes through here as well.
    pub fn cancel(&mut self) -> Result<(), FlowError> {
        if !matches!(self.view, ViewState::Create | ViewState::Update) {
            return Err(FlowError::State { state: self.view });
        }
        self.reset_to_list();

        Ok(())
    }

    /// Submit the buffer from `create` or `update`.
    ///
    /// Runs the validation gate first; a failed gate leaves the view
    /// and the collection untouched. On success the mutation is applied
    /// atomically and the view returns to `list`.
    pub fn submit(&mut self) -> Result<RecordId, FlowError> {
        match self.view {
            ViewState::Create => self.submit_create(),
            ViewState::Update => self.submit_update(),
            state => Err(FlowError::State { state }),
        }
    }

    fn submit_create(&mut self) -> Result<RecordId, FlowError> {
        if let Err(err) = self.draft.validate() {
            tracing::warn!(module = D::Record::ID_PREFIX, %err, "create rejected");
            return Err(err.into());
        }

        let id = self.ids.next_id(D::Record::ID_PREFIX)?;
        let record = self
            .draft
            .create(id.clone(), Timestamp::now(), &self.owner_label);

        self.collection.create(record)?;
        self.reset_to_list();

        Ok(id)
    }

    fn submit_update(&mut self) -> Result<RecordId, FlowError> {
        if let Err(err) = self.draft.validate() {
            tracing::warn!(module = D::Record::ID_PREFIX, %err, "update rejected");
            return Err(err.into());
        }

        let Some(id) = self.selected.clone() else {
            // nothing selected behaves like a missing id: back to the
            // list with no mutation, outcome still reported
            self.reset_to_list();
            return Err(FlowError::State {
                state: ViewState::Update,
            });
        };

        let draft = self.draft.clone();
        let outcome = self
            .collection
            .update(&id, |record| draft.apply(record))
            .map(|_| ());
        self.reset_to_list();

        match outcome {
            Ok(()) => Ok(id),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove a record where the module supports deletion, clearing the
    /// selection if it pointed at the removed record.
    pub fn remove(&mut self, id: &RecordId) -> Option<D::Record> {
        let removed = self.collection.remove(id)?;

        if self.selected.as_ref() == Some(id) {
            self.reset_to_list();
        }

        Some(removed)
    }

    fn reset_to_list(&mut self) {
        self.selected = None;
        self.draft = D::default();
        self.view = ViewState::List;
    }

    fn expect_view(&self, expected: ViewState) -> Result<(), FlowError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(FlowError::State { state: self.view })
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::client::{Client, ClientDraft, ClientStatus};

    fn manager_with_acme() -> (EntityManager<ClientDraft>, RecordId) {
        let mut manager = EntityManager::<ClientDraft>::new("Northside Agency");
        manager.begin_create().unwrap();
        *manager.draft_mut() = ClientDraft {
            name: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            monthly_retainer: "5000".to_string(),
            ..ClientDraft::default()
        };
        let id = manager.submit().unwrap();

        (manager, id)
    }

    #[test]
    fn create_flow_lands_newest_first_with_defaults() {
        let (manager, id) = manager_with_acme();

        assert_eq!(manager.view(), ViewState::List);
        assert_eq!(manager.records().len(), 1);

        let record = &manager.records()[0];
        assert_eq!(record.id, id);
        assert_eq!(record.name, "Acme");
        assert_eq!(record.status, ClientStatus::Active);
        assert_eq!(record.owner_label, "Northside Agency");
        assert_eq!(record.monthly_retainer, 5000.0);
    }

    #[test]
    fn invalid_create_stays_in_create_view() {
        let mut manager = EntityManager::<ClientDraft>::new("Northside Agency");
        manager.begin_create().unwrap();
        manager.draft_mut().name = "Acme".to_string();

        let err = manager.submit().unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert_eq!(manager.view(), ViewState::Create);
        assert!(manager.records().is_empty());
        // the typed buffer survives the rejection
        assert_eq!(manager.draft().name, "Acme");
    }

    #[test]
    fn edit_and_submit_updates_only_mutable_fields() {
        let (mut manager, id) = manager_with_acme();
        let created_at = manager.records()[0].created_at;

        manager.select(&id).unwrap();
        manager.begin_edit().unwrap();
        manager.draft_mut().status = ClientStatus::Inactive;
        let submitted = manager.submit().unwrap();

        assert_eq!(submitted, id);
        assert_eq!(manager.view(), ViewState::List);

        let record = &manager.records()[0];
        assert_eq!(record.id, id);
        assert_eq!(record.status, ClientStatus::Inactive);
        assert_eq!(record.name, "Acme");
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn begin_edit_buffers_match_the_selected_record() {
        let (mut manager, id) = manager_with_acme();

        manager.select(&id).unwrap();
        manager.begin_edit().unwrap();

        let record = manager.collection().get(&id).unwrap();
        assert_eq!(manager.draft(), &ClientDraft::from_record(record));
        assert_eq!(manager.view(), ViewState::Update);
    }

    #[test]
    fn cancel_from_update_leaves_the_store_unchanged() {
        let (mut manager, id) = manager_with_acme();
        let before: Vec<Client> = manager.records().to_vec();

        manager.select(&id).unwrap();
        manager.begin_edit().unwrap();
        manager.draft_mut().name = "Totally Different".to_string();
        manager.cancel().unwrap();

        assert_eq!(manager.view(), ViewState::List);
        assert!(manager.selected().is_none());
        assert_eq!(manager.records(), before.as_slice());
    }

    #[test]
    fn switching_selection_resets_the_buffer() {
        let (mut manager, first_id) = manager_with_acme();
        manager.begin_create().unwrap();
        *manager.draft_mut() = ClientDraft {
            name: "Globex".to_string(),
            email: "ops@globex.com".to_string(),
            monthly_retainer: "1200".to_string(),
            ..ClientDraft::default()
        };
        let second_id = manager.submit().unwrap();

        manager.select(&second_id).unwrap();
        assert_eq!(manager.draft().name, "Globex");
        manager.close().unwrap();

        manager.select(&first_id).unwrap();
        assert_eq!(manager.draft().name, "Acme");
    }

    #[test]
    fn wrong_state_actions_change_nothing() {
        let (mut manager, id) = manager_with_acme();

        assert!(matches!(
            manager.submit(),
            Err(FlowError::State {
                state: ViewState::List
            })
        ));
        assert!(matches!(manager.cancel(), Err(FlowError::State { .. })));
        assert!(matches!(manager.begin_edit(), Err(FlowError::State { .. })));

        manager.select(&id).unwrap();
        assert!(matches!(
            manager.begin_create(),
            Err(FlowError::State {
                state: ViewState::Show
            })
        ));
        assert_eq!(manager.view(), ViewState::Show);
    }

    #[test]
    fn selecting_a_missing_id_reports_not_found() {
        let (mut manager, _) = manager_with_acme();
        let missing = RecordId::new("client_missing").unwrap();

        let err = manager.select(&missing).unwrap_err();
        assert!(matches!(
            err,
            FlowError::Store(StoreError::NotFound { .. })
        ));
        assert_eq!(manager.view(), ViewState::List);
    }

    #[test]
    fn update_applied_twice_is_idempotent() {
        let (mut manager, id) = manager_with_acme();

        for _ in 0..2 {
            manager.select(&id).unwrap();
            manager.begin_edit().unwrap();
            manager.draft_mut().notes = "quarterly review booked".to_string();
            manager.draft_mut().status = ClientStatus::Inactive;
            manager.submit().unwrap();
        }

        let record = &manager.records()[0];
        assert_eq!(record.notes, "quarterly review booked");
        assert_eq!(record.status, ClientStatus::Inactive);
        assert_eq!(manager.records().len(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_draft() -> impl Strategy<Value = ClientDraft> {
            (
                "[A-Za-z ]{1,24}",
                "[a-z]{1,12}@[a-z]{1,12}\\.com",
                1..1_000_000i64,
                "[A-Za-z0-9 ]{0,40}",
                prop_oneof![Just(ClientStatus::Active), Just(ClientStatus::Inactive)],
            )
                .prop_map(|(name, email, retainer, notes, status)| ClientDraft {
                    name,
                    email,
                    monthly_retainer: retainer.to_string(),
                    notes,
                    status,
                    ..ClientDraft::default()
                })
        }

        proptest! {
            #[test]
            fn created_ids_are_pairwise_distinct(drafts in prop::collection::vec(arb_draft(), 1..32)) {
                let mut manager = EntityManager::<ClientDraft>::new("Northside Agency");
                let mut ids = Vec::new();

                for draft in drafts {
                    manager.begin_create().unwrap();
                    *manager.draft_mut() = draft;
                    ids.push(manager.submit().unwrap());
                }

                let mut deduped = ids.clone();
                deduped.sort();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), ids.len());
            }

            #[test]
            fn applying_the_same_edit_twice_matches_applying_it_once(
                initial in arb_draft(),
                edit in arb_draft(),
            ) {
                let mut manager = EntityManager::<ClientDraft>::new("Northside Agency");
                manager.begin_create().unwrap();
                *manager.draft_mut() = initial;
                let id = manager.submit().unwrap();

                manager.select(&id).unwrap();
                manager.begin_edit().unwrap();
                *manager.draft_mut() = edit.clone();
                manager.submit().unwrap();
                let once = manager.records()[0].clone();

                manager.select(&id).unwrap();
                manager.begin_edit().unwrap();
                *manager.draft_mut() = edit;
                manager.submit().unwrap();

                prop_assert_eq!(&manager.records()[0], &once);
            }
        }
    }

    #[test]
    fn remove_clears_a_matching_selection() {
        let (mut manager, id) = manager_with_acme();
        manager.select(&id).unwrap();

        let removed = manager.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(manager.view(), ViewState::List);
        assert!(manager.selected().is_none());
        assert!(manager.records().is_empty());
    }
}
