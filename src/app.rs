//! Kanban Board App
//!
//! Loads the board from local storage and lays out the page.

use kanban_core::{BoardConfig, BoardController, LoadSource};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ErrorBanner, KanbanBoard};
use crate::context::BoardContext;
use crate::storage::BrowserStorage;
use crate::store::UiState;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let controller = BoardController::load(BrowserStorage, config);
    match controller.load_source() {
        LoadSource::Snapshot => {}
        LoadSource::Legacy => {
            // Rewrite imported data in the versioned layout right away
            if let Err(err) = controller.save() {
                tracing::warn!(%err, "could not save imported board");
            }
        }
        LoadSource::Seed => tracing::info!("no saved board, showing defaults"),
    }

    // Provide context to all children
    let ui = Store::new(UiState::default());
    provide_context(ui);
    provide_context(BoardContext::new(controller, ui));

    view! {
        <h1 class="board-heading">"Project Board"</h1>
        <div class="board-divider">
            <hr />
        </div>
        <ErrorBanner />
        <KanbanBoard />
    }
}
