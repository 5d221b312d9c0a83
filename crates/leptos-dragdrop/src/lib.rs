//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Items and targets are identified by a caller-chosen key `K`. The caller
//! receives one [`DndEvent`] per lifecycle step and owns all state changes.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Lifecycle of one drag gesture
#[derive(Clone, Debug, PartialEq)]
pub enum DndEvent<K> {
    /// Pointer moved past the threshold while holding `K`
    Start(K),
    /// Pointer reached a new drop target
    Over { active: K, over: K },
    /// Mouse released, over a target or over nothing
    End { active: K, over: Option<K> },
    /// Escape pressed during the drag
    Cancel(K),
}

/// DnD state signals
pub struct DndSignals<K: Send + Sync + 'static> {
    pub dragging_read: ReadSignal<Option<K>>,
    dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<K>>,
    drop_target_write: WriteSignal<Option<K>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    drag_just_ended_write: WriteSignal<bool>,
    /// Pending item (mousedown but not yet dragging)
    pending_read: ReadSignal<Option<K>>,
    pending_write: WriteSignal<Option<K>>,
    /// Press position for movement detection
    start_read: ReadSignal<(i32, i32)>,
    start_write: WriteSignal<(i32, i32)>,
    /// Latest pointer position, for drag previews
    pub pointer_read: ReadSignal<(i32, i32)>,
    pointer_write: WriteSignal<(i32, i32)>,
    threshold_px: i32,
    on_event: Callback<DndEvent<K>>,
}

impl<K: Send + Sync + 'static> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for DndSignals<K> {}

impl<K> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn is_dragging(&self, key: &K) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(key))
    }

    pub fn is_drop_target(&self, key: &K) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(key))
    }
}

/// Create signals for one drag-and-drop area.
///
/// `threshold_px` is the pointer travel that turns a press into a drag.
pub fn create_dnd_signals<K, F>(threshold_px: i32, on_event: F) -> DndSignals<K>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(DndEvent<K>) + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<K>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        pointer_read,
        pointer_write,
        threshold_px,
        on_event: Callback::new(on_event),
    }
}

/// End drag operation
pub fn end_drag<K: Send + Sync + 'static>(dnd: &DndSignals<K>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Keep the flag up long enough to swallow the click that follows mouseup
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for drag handles
/// Records pending drag with start position
pub fn make_on_mousedown<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        ev.stop_propagation();
        dnd.pending_write.set(Some(key.clone()));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mousemove handler for drop targets.
///
/// Targets nest (cards sit inside columns), so the innermost target claims
/// the event and stops propagation.
pub fn make_on_target_mousemove<K>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(active) = dnd.dragging_read.get_untracked() else {
            return;
        };
        ev.stop_propagation();
        if dnd.drop_target_read.with_untracked(|t| t.as_ref() == Some(&key)) {
            return;
        }
        dnd.drop_target_write.set(Some(key.clone()));
        // Don't report hovering over self
        if active != key {
            dnd.on_event.run(DndEvent::Over { active, over: key.clone() });
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<K>(dnd: DndSignals<K>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove: starts the drag once the pointer moved enough
fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        let dragging = dnd.dragging_read.get_untracked();

        if dragging.is_some() {
            dnd.pointer_write.set((ev.client_x(), ev.client_y()));
            return;
        }

        if let Some(key) = pending {
            let (start_x, start_y) = dnd.start_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > dnd.threshold_px || dy > dnd.threshold_px {
                dnd.pointer_write.set((ev.client_x(), ev.client_y()));
                dnd.dragging_write.set(Some(key.clone()));
                dnd.on_event.run(DndEvent::Start(key));
            }
        }
    });

    add_document_listener("mousemove", &on_mousemove);
    on_mousemove.forget();
}

/// Bind document keydown: Escape cancels a running drag
fn bind_global_keydown<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        if let Some(active) = dnd.dragging_read.get_untracked() {
            end_drag(&dnd);
            dnd.on_event.run(DndEvent::Cancel(active));
        }
    });

    add_document_listener("keydown", &on_keydown);
    on_keydown.forget();
}

/// Bind global mouseup, mousemove and keydown handlers
pub fn bind_global_handlers<K>(dnd: DndSignals<K>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        if let Some(active) = dragging {
            end_drag(&dnd);
            dnd.on_event.run(DndEvent::End { active, over: drop_target });
        }
        // Otherwise it was a click; it fires naturally on the element
    });

    add_document_listener("mouseup", &on_mouseup);
    on_mouseup.forget();

    bind_global_mousemove(dnd);
    bind_global_keydown(dnd);
}

fn add_document_listener<E: ?Sized>(event: &str, handler: &Closure<E>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
}
