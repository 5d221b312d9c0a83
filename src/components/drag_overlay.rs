//! Drag Overlay Component
//!
//! Floating copy of the column or card being dragged, pinned to the pointer.

use kanban_core::{DragItem, DragState};
use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::context::use_board;

/// Offset between the pointer and the preview's top-left corner
const POINTER_OFFSET_PX: i32 = 12;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let ctx = use_board();
    let dnd = expect_context::<DndSignals<DragItem>>();

    let position = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x + POINTER_OFFSET_PX, y + POINTER_OFFSET_PX)
    };

    move || match ctx.read(|c| c.drag().state().clone()) {
        DragState::Idle => view! { <div class="drag-overlay hidden"></div> }.into_any(),
        DragState::DraggingStatus(status) => {
            let count = ctx.read_untracked(|c| c.board().task_count(&status.id));
            view! {
                <div class="drag-overlay" style=position>
                    <div class="status-column preview">
                        <div class="status-header">
                            <div class="status-heading">
                                <div class="status-title" style:background-color=status.background_color>
                                    {status.title}
                                </div>
                                <span class="task-count">{count}</span>
                            </div>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
        DragState::DraggingTask(task) => view! {
            <div class="drag-overlay" style=position>
                <div class="task-card preview">
                    <p class="task-content">{task.content}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}
