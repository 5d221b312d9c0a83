//! Application Context
//!
//! The board controller, shared via Leptos Context API. Components read
//! through `read` and change the board only through `apply`.

use kanban_core::{BoardController, BoardResult};
use leptos::prelude::*;

use crate::storage::BrowserStorage;
use crate::store::{store_report_error, UiStore};

pub type Controller = BoardController<BrowserStorage>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    board: RwSignal<Controller>,
    ui: UiStore,
}

impl BoardContext {
    pub fn new(controller: Controller, ui: UiStore) -> Self {
        Self {
            board: RwSignal::new(controller),
            ui,
        }
    }

    /// Tracked read of the controller
    pub fn read<T>(&self, f: impl FnOnce(&Controller) -> T) -> T {
        self.board.with(f)
    }

    pub fn read_untracked<T>(&self, f: impl FnOnce(&Controller) -> T) -> T {
        self.board.with_untracked(f)
    }

    /// Run a board operation. Failures are logged and shown in the banner.
    pub fn apply<T>(&self, op: impl FnOnce(&mut Controller) -> BoardResult<T>) -> Option<T> {
        match self.board.try_update(op)? {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%err, "board operation failed");
                store_report_error(&self.ui, err.to_string());
                None
            }
        }
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
