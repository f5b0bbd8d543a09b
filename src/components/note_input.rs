//! Note Input Component
//!
//! Text field for the open draft, styled like the note it will become.

use leptos::prelude::*;

use crate::context::use_wall_context;
use crate::models::DraftNote;
use crate::wall::{WallEvent, WallStoreFields};

/// Whether a keydown should commit the draft
///
/// Enter also confirms IME candidates; only a bare Enter commits.
pub fn is_commit_key(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

#[component]
pub fn NoteInput(draft: DraftNote) -> impl IntoView {
    let ctx = use_wall_context();
    let store = ctx.store;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus as soon as the field exists
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let style = format!(
        "left: {}px; top: {}px; z-index: {}; {}",
        draft.x,
        draft.y,
        draft.z_index,
        draft.style.to_css()
    );
    let value = move || {
        store
            .draft()
            .with(|d| d.as_ref().map(|d| d.text.clone()).unwrap_or_default())
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_commit_key(&ev.key(), ev.is_composing()) {
            ctx.dispatch(WallEvent::Enter);
        }
    };

    view! {
        <input
            node_ref=input_ref
            type="text"
            class="note-input"
            style=style
            prop:value=value
            on:input=move |ev| {
                ctx.dispatch(WallEvent::Edit(event_target_value(&ev)));
            }
            on:keydown=on_keydown
        />
    }
}
