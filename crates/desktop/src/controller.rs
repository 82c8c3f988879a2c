//! Form controller: the add/remove button handlers without the widgets.
//!
//! Each call runs to completion and leaves the store and the view in step:
//! the table is only refreshed from the store, never patched in place.

use stockdesk_core::ValidationError;
use stockdesk_inventory::{InventoryStore, Product};

use crate::config::DesktopConfig;
use crate::form::ProductForm;
use crate::view::{Alert, InventoryView, TableRow, project_rows};

/// Lifecycle of a single add submission.
///
/// `Idle -> Validating -> {Committed | Rejected} -> Idle`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Committed,
    Rejected,
}

impl SubmissionState {
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Committed)
                | (Validating, Rejected)
                | (Committed, Idle)
                | (Rejected, Idle)
        )
    }
}

/// Result of an add submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was stored at row `index`; table refreshed, fields cleared.
    Committed { index: usize },
    /// Nothing changed except for one warning shown to the user.
    Rejected(ValidationError),
}

impl AddOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, AddOutcome::Committed { .. })
    }
}

/// Result of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { index: usize, product: Product },
    /// No row was selected; nothing happened.
    NoSelection,
    /// The selection pointed past the last row; nothing happened.
    OutOfRange { index: usize },
}

/// Owns the inventory and drives a view through [`InventoryView`].
#[derive(Debug, Clone)]
pub struct FormController {
    store: InventoryStore,
    config: DesktopConfig,
    state: SubmissionState,
}

impl FormController {
    pub fn new(config: DesktopConfig) -> Self {
        Self::with_store(InventoryStore::new(), config)
    }

    pub fn with_store(store: InventoryStore, config: DesktopConfig) -> Self {
        Self {
            store,
            config,
            state: SubmissionState::Idle,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Current table contents, derived from the store.
    pub fn rows(&self) -> Vec<TableRow> {
        project_rows(&self.store, &self.config.currency_prefix)
    }

    /// Handle the "add" button.
    ///
    /// Validation finishes before anything is mutated. On rejection the store
    /// and the fields are left alone and exactly one warning is shown.
    pub fn submit_add<V>(&mut self, form: &ProductForm, view: &mut V) -> AddOutcome
    where
        V: InventoryView + ?Sized,
    {
        self.transition(SubmissionState::Validating);

        let outcome = match form.validate() {
            Ok(product) => {
                self.transition(SubmissionState::Committed);
                let index = self.store.add(product);
                view.refresh_table(&self.rows());
                view.clear_fields();
                tracing::info!(index, count = self.store.count(), "product added");
                AddOutcome::Committed { index }
            }
            Err(err) => {
                self.transition(SubmissionState::Rejected);
                tracing::warn!(field = err.field(), error = %err, "add rejected");
                view.show_warning(&Alert::invalid_input(&err));
                AddOutcome::Rejected(err)
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    /// Handle the "remove" button for the currently selected row, if any.
    pub fn remove_selected<V>(&mut self, selection: Option<usize>, view: &mut V) -> RemoveOutcome
    where
        V: InventoryView + ?Sized,
    {
        let Some(index) = selection else {
            tracing::debug!("remove ignored: no row selected");
            return RemoveOutcome::NoSelection;
        };

        match self.store.remove_at(index) {
            Some(product) => {
                view.refresh_table(&self.rows());
                tracing::info!(index, count = self.store.count(), "product removed");
                RemoveOutcome::Removed { index, product }
            }
            None => RemoveOutcome::OutOfRange { index },
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal submission transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(from = ?self.state, to = ?next, "submission state");
        self.state = next;
    }
}
