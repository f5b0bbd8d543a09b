//! Leptos Scoped Event Utilities
//!
//! Document-level event listeners whose lifetime is tied to a guard value
//! (and, through `use_document_click`, to the current reactive owner).
//! Dropping the guard removes the listener and frees the JS closure.

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Failure to attach a document listener
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no document available to attach `{0}` listener")]
    NoDocument(&'static str),
    #[error("failed to bind `{event}` listener: {reason}")]
    Bind { event: &'static str, reason: String },
}

/// A listener registered on `document`, removed on drop
pub struct DocumentListener {
    event: &'static str,
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Bind a raw event listener on `document`
pub fn bind_document_listener<F>(event: &'static str, handler: F) -> Result<DocumentListener, ListenerError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or(ListenerError::NoDocument(event))?;

    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    document
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| ListenerError::Bind {
            event,
            reason: format!("{:?}", e),
        })?;

    Ok(DocumentListener { event, document, callback })
}

/// Bind a click listener on `document`
///
/// Non-mouse events dispatched under the `click` name are skipped.
pub fn bind_document_click<F>(mut handler: F) -> Result<DocumentListener, ListenerError>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    bind_document_listener("click", move |ev: web_sys::Event| {
        if let Ok(mouse) = ev.dyn_into::<web_sys::MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Bind a document click listener for the lifetime of the current owner
///
/// The listener is released when the owning component is cleaned up.
pub fn use_document_click<F>(handler: F) -> Result<(), ListenerError>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let listener = bind_document_click(handler)?;
    let slot = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        slot.update_value(|listener| {
            listener.take();
        });
    });
    Ok(())
}

/// Whether the event originated on a text entry widget
pub fn is_text_input_target(ev: &web_sys::Event) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        }
        None => false,
    }
}
