//! Kanban Board Component
//!
//! Columns in board order plus the "Add Status" button. Owns the drag area
//! and forwards every drag lifecycle event to the controller.

use kanban_core::DragItem;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DragOverlay, StatusColumn};
use crate::context::{use_board, BoardContext};

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_board();

    let threshold = ctx.read_untracked(|c| c.config().drag_threshold_px);
    let dnd = create_dnd_signals(threshold, move |event| on_drag_event(ctx, event));
    bind_global_handlers(dnd);
    provide_context(dnd);

    let status_ids = move || {
        ctx.read(|c| c.board().statuses().iter().map(|s| s.id.clone()).collect::<Vec<_>>())
    };

    view! {
        <div class="board-scroll">
            <div class="board">
                <div class="board-columns">
                    <For
                        each=status_ids
                        key=|id| id.clone()
                        children=move |id| view! { <StatusColumn status_id=id /> }
                    />
                </div>
                <button
                    class="add-status-btn"
                    on:click=move |_| {
                        ctx.apply(|c| c.create_status());
                    }
                >
                    "+ Add Status"
                </button>
            </div>
            <DragOverlay />
        </div>
    }
}

fn on_drag_event(ctx: BoardContext, event: DndEvent<DragItem>) {
    tracing::debug!(?event, "drag event");
    match event {
        DndEvent::Start(item) => {
            ctx.apply(|c| Ok(c.drag_start(&item)));
        }
        DndEvent::Over { over, .. } => {
            ctx.apply(|c| c.drag_over(&over));
        }
        DndEvent::End { over, .. } => {
            ctx.apply(|c| c.drag_end(over.as_ref()));
        }
        DndEvent::Cancel(_) => {
            ctx.apply(|c| c.drag_cancel());
        }
    }
}
