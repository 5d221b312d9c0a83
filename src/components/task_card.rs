//! Task Card Component
//!
//! A card: click to edit its content, drag to move it. Each card is both a
//! drag handle and a drop target.

use kanban_core::{DragItem, Id};
use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_board;
use crate::store::{store_is_editing, store_pins_task, store_set_editing, use_ui_store, EditTarget};

#[component]
pub fn TaskCard(task_id: Id) -> impl IntoView {
    let ctx = use_board();
    let ui = use_ui_store();
    let dnd = expect_context::<DndSignals<DragItem>>();

    let item = DragItem::Task(task_id.clone());
    let target = EditTarget::TaskContent(task_id.clone());

    let content = {
        let id = task_id.clone();
        move || ctx.read(|c| c.board().task(&id).map(|t| t.content.clone()).unwrap_or_default())
    };
    let editing = move || store_is_editing(&ui, &target);

    // Pinned while this card or its column title is being edited
    let on_mousedown = {
        let start = make_on_mousedown(dnd, item.clone());
        let id = task_id.clone();
        move |ev: web_sys::MouseEvent| {
            let Some(status_id) = ctx.read_untracked(|c| c.board().task(&id).map(|t| t.status_id.clone())) else {
                return;
            };
            if !store_pins_task(&ui, &id, &status_id) {
                start(ev);
            }
        }
    };
    let on_mousemove = make_on_target_mousemove(dnd, item.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = move || {
        let mut c = String::from("task-card");
        if dnd.is_dragging(&item) { c.push_str(" dragging"); }
        if dnd.is_drop_target(&item) { c.push_str(" drop-target"); }
        c
    };

    let on_click = {
        let id = task_id.clone();
        move |_: web_sys::MouseEvent| {
            if !dnd.drag_just_ended_read.get_untracked() {
                store_set_editing(&ui, Some(EditTarget::TaskContent(id.clone())));
            }
        }
    };

    let textarea_ref = NodeRef::<html::Textarea>::new();
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
        }
    });

    let body = {
        let id = task_id.clone();
        let content = content.clone();
        move || {
            if editing() {
                let id = id.clone();
                view! {
                    <textarea
                        class="task-content-input"
                        node_ref=textarea_ref
                        placeholder="Task content here"
                        prop:value=content.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.apply(|c| c.rename_task(&id, value));
                        }
                        on:blur=move |_| store_set_editing(&ui, None)
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            // Shift+Enter inserts a newline
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                store_set_editing(&ui, None);
                            }
                        }
                    ></textarea>
                }
                .into_any()
            } else {
                view! { <p class="task-content">{content.clone()}</p> }.into_any()
            }
        }
    };

    let delete_task = {
        let id = task_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.apply(|c| c.delete_task(&id));
        }
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
            on:click=on_click
        >
            {body}
            <button class="delete-task-btn" title="Delete task" on:click=delete_task>
                "×"
            </button>
        </div>
    }
}
