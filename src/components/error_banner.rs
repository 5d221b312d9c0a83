//! Error Banner Component
//!
//! Shows the last failed board operation (usually a full local storage) and
//! hides it again after a few seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{store_clear_error, store_dismiss_error, use_ui_store, UiStateStoreFields};

const DISMISS_AFTER_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ui = use_ui_store();

    // Replacing the pending timer drops it, which cancels it.
    let pending = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        let timer = ui.last_error().with(|notice| notice.as_ref().map(|n| n.seq)).map(|seq| {
            Timeout::new(DISMISS_AFTER_MS, move || store_dismiss_error(&ui, seq))
        });
        pending.set_value(timer);
    });

    move || {
        ui.last_error().get().map(|notice| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{notice.message}</span>
                    <button class="error-dismiss" on:click=move |_| store_clear_error(&ui)>"×"</button>
                </div>
            }
        })
    }
}
