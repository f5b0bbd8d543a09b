//! Note View Component
//!
//! A committed note: the outer box drifts forever, the inner text plays its
//! entrance once.

use leptos::prelude::*;

use crate::models::Note;

#[component]
pub fn NoteView(note: Note, drift_period_secs: u32) -> impl IntoView {
    let (x, y) = note.position();
    let drift = note.drift();
    let outer_style = format!(
        "left: {}px; top: {}px; z-index: {}; animation-duration: {}s; {}",
        x,
        y,
        note.z_index(),
        drift_period_secs,
        drift.to_css_vars()
    );
    let body_class = format!("note-body {}", note.entrance().class_name());

    view! {
        <div class="note" data-drift=drift.id.clone() style=outer_style>
            <span class=body_class style=note.style().to_css()>
                {note.text().to_string()}
            </span>
        </div>
    }
}
