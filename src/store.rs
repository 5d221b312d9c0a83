//! UI State Store
//!
//! Transient view state with field-level reactivity. Board data lives in the
//! controller signal (see `context`), not here.

use kanban_core::Id;
use leptos::prelude::*;
use reactive_stores::Store;

/// Which inline editor is open
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    StatusTitle(Id),
    TaskContent(Id),
}

impl EditTarget {
    /// Editing a card, or the title of its column, pins the card in place.
    pub fn pins_task(&self, task_id: &Id, status_id: &Id) -> bool {
        match self {
            EditTarget::TaskContent(id) => id == task_id,
            EditTarget::StatusTitle(id) => id == status_id,
        }
    }
}

/// A failed board operation. `seq` tells repeated failures apart.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub seq: u64,
    pub message: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// At most one title or card is in edit mode
    pub editing: Option<EditTarget>,
    /// Last failed board operation, shown in the error banner
    pub last_error: Option<ErrorNotice>,
    /// Sequence number of the latest notice
    pub error_seq: u64,
}

impl ErrorNotice {
    /// Notice following sequence number `seq`
    fn after(seq: u64, message: String) -> Self {
        Self { seq: seq + 1, message }
    }
}

/// A timed dismissal only clears the notice it was scheduled for.
fn dismissal_applies(current: Option<&ErrorNotice>, seq: u64) -> bool {
    current.is_some_and(|notice| notice.seq == seq)
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_editing(store: &UiStore, target: Option<EditTarget>) {
    store.editing().set(target);
}

pub fn store_is_editing(store: &UiStore, target: &EditTarget) -> bool {
    store.editing().with(|editing| editing.as_ref() == Some(target))
}

/// Whether the card may not start a drag right now
pub fn store_pins_task(store: &UiStore, task_id: &Id, status_id: &Id) -> bool {
    store.editing().with_untracked(|editing| {
        editing.as_ref().is_some_and(|target| target.pins_task(task_id, status_id))
    })
}

pub fn store_report_error(store: &UiStore, message: String) {
    let notice = ErrorNotice::after(store.error_seq().get_untracked(), message);
    store.error_seq().set(notice.seq);
    store.last_error().set(Some(notice));
}

pub fn store_dismiss_error(store: &UiStore, seq: u64) {
    if store.last_error().with_untracked(|current| dismissal_applies(current.as_ref(), seq)) {
        store.last_error().set(None);
    }
}

pub fn store_clear_error(store: &UiStore) {
    store.last_error().set(None);
}
