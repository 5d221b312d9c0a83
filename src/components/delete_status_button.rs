//! Delete Status Button
//!
//! Column delete with an inline confirmation that says how many cards go
//! with the column.

use kanban_core::Id;
use leptos::prelude::*;

use crate::context::use_board;

/// Confirmation text for deleting a column holding `cards` cards
fn delete_prompt(cards: usize) -> String {
    match cards {
        0 => "Delete column?".to_string(),
        1 => "Delete column and its card?".to_string(),
        n => format!("Delete column and its {n} cards?"),
    }
}

#[component]
pub fn DeleteStatusButton(status_id: Id) -> impl IntoView {
    let ctx = use_board();
    let armed = RwSignal::new(false);

    let prompt = {
        let id = status_id.clone();
        move || delete_prompt(ctx.read(|c| c.board().task_count(&id)))
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed.set(false);
        ctx.apply(|c| c.delete_status(&status_id));
    };

    move || {
        if armed.get() {
            let confirm = confirm.clone();
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Delete" on:click=confirm>"✓"</button>
                    <button
                        class="cancel-btn"
                        title="Keep"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-status-btn"
                    title="Delete status"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
