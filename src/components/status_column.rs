//! Status Column Component
//!
//! One board column: a header that doubles as the drag handle, the cards
//! of the column, and a button for new cards. The whole column is a drop
//! target.

use kanban_core::{DragItem, Id};
use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DeleteStatusButton, TaskCard};
use crate::context::use_board;
use crate::store::{store_is_editing, store_set_editing, use_ui_store, EditTarget};

#[component]
pub fn StatusColumn(status_id: Id) -> impl IntoView {
    let ctx = use_board();
    let ui = use_ui_store();
    let dnd = expect_context::<DndSignals<DragItem>>();

    let item = DragItem::Status(status_id.clone());
    let target = EditTarget::StatusTitle(status_id.clone());

    let title = {
        let id = status_id.clone();
        move || ctx.read(|c| c.board().status(&id).map(|s| s.title.clone()).unwrap_or_default())
    };
    let color = {
        let id = status_id.clone();
        move || ctx.read(|c| c.board().status(&id).map(|s| s.background_color.clone()).unwrap_or_default())
    };
    let task_count = {
        let id = status_id.clone();
        move || ctx.read(|c| c.board().task_count(&id))
    };
    let task_ids = {
        let id = status_id.clone();
        move || ctx.read(|c| c.board().tasks_in(&id).map(|t| t.id.clone()).collect::<Vec<_>>())
    };
    let editing = move || store_is_editing(&ui, &target);

    // Drag handle is disabled while the title is being edited
    let on_mousedown = {
        let start = make_on_mousedown(dnd, item.clone());
        let editing = editing.clone();
        move |ev: web_sys::MouseEvent| {
            if !editing() {
                start(ev);
            }
        }
    };
    let on_mousemove = make_on_target_mousemove(dnd, item.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = {
        let item = item.clone();
        move || {
            let mut c = String::from("status-column");
            if dnd.is_dragging(&item) { c.push_str(" dragging"); }
            if dnd.is_drop_target(&item) { c.push_str(" drop-target"); }
            c
        }
    };

    let on_header_click = {
        let id = status_id.clone();
        move |_: web_sys::MouseEvent| {
            if !dnd.drag_just_ended_read.get_untracked() {
                store_set_editing(&ui, Some(EditTarget::StatusTitle(id.clone())));
            }
        }
    };

    let input_ref = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let title_view = {
        let id = status_id.clone();
        let title = title.clone();
        move || {
            if editing() {
                let id = id.clone();
                view! {
                    <input
                        class="status-title-input"
                        node_ref=input_ref
                        prop:value=title.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.apply(|c| c.rename_status(&id, value));
                        }
                        on:blur=move |_| store_set_editing(&ui, None)
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                store_set_editing(&ui, None);
                            }
                        }
                    />
                }
                .into_any()
            } else {
                view! { <span class="status-title-text">{title.clone()}</span> }.into_any()
            }
        }
    };

    let add_status = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.apply(|c| c.create_status());
    };
    let new_task = {
        let id = status_id.clone();
        move |_: web_sys::MouseEvent| {
            ctx.apply(|c| c.create_task(&id));
        }
    };

    view! {
        <div class=column_class on:mousemove=on_mousemove on:mouseleave=on_mouseleave>
            <div class="status-header" on:mousedown=on_mousedown on:click=on_header_click>
                <div class="status-heading">
                    <div class="status-title" style:background-color=color>
                        {title_view}
                    </div>
                    <span class="task-count">{task_count}</span>
                </div>
                <div class="status-actions">
                    <button class="add-status-inline-btn" title="Add status" on:click=add_status>
                        "+"
                    </button>
                    <DeleteStatusButton status_id=status_id.clone() />
                </div>
            </div>

            <div class="status-cards">
                <For
                    each=task_ids
                    key=|id| id.clone()
                    children=move |task_id| view! { <TaskCard task_id=task_id /> }
                />
            </div>

            <button class="new-task-btn" on:click=new_task>
                "+ New"
            </button>
        </div>
    }
}
