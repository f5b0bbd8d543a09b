//! Graffiti Wall App
//!
//! Root component: decorations, committed notes and the draft input.

use leptos::prelude::*;
use leptos_scoped_events::{is_text_input_target, use_document_click};
use reactive_stores::Store;

use crate::components::{BorderMarquee, NoteInput, NoteView, TitleBanner};
use crate::config::WallConfig;
use crate::context::WallContext;
use crate::style::StyleGenerator;
use crate::wall::{PointerTarget, Wall, WallEvent, WallStoreFields};

#[component]
pub fn App(config: WallConfig) -> impl IntoView {
    // State
    let store = Store::new(Wall::new());
    let generator = StoredValue::new(StyleGenerator::from_page(&config));
    let ctx = WallContext::new(store, generator);
    provide_context(ctx);

    // Every click outside the draft input places a note
    let bound = use_document_click(move |ev: web_sys::MouseEvent| {
        let target = if is_text_input_target(&ev) {
            PointerTarget::ActiveInput
        } else {
            PointerTarget::Wall
        };
        ctx.dispatch(WallEvent::Click {
            x: ev.client_x(),
            y: ev.client_y(),
            target,
        });
    });
    if let Err(e) = bound {
        log::error!("Wall will not accept notes: {}", e);
    }

    // Re-mount the input only when a different draft opens, not per keystroke
    let draft_id = Memo::new(move |_| store.draft().with(|d| d.as_ref().map(|d| d.id)));
    let drift_period_secs = config.drift_period_secs;

    view! {
        <div class="wall">
            <TitleBanner title=config.title_text.clone() interval_ms=config.typewriter_interval_ms />
            <BorderMarquee text=config.marquee_text.clone() />

            <For
                each=move || store.committed().get()
                key=|note| note.id()
                children=move |note| view! { <NoteView note=note drift_period_secs=drift_period_secs /> }
            />

            {move || {
                draft_id.get()
                    .and_then(|_| store.draft().get_untracked())
                    .map(|draft| view! { <NoteInput draft=draft /> })
            }}
        </div>
    }
}
