//! Border Marquee Component
//!
//! Dashed frame with instruction text scrolling along all four edges.

use leptos::prelude::*;

/// (strip class, text class) per edge
const STRIPS: &[(&str, &str)] = &[
    ("strip strip-top", "marquee"),
    ("strip strip-bottom", "marquee"),
    ("strip strip-left", "marquee-vertical vertical-text"),
    ("strip strip-right", "marquee-vertical vertical-text"),
];

#[component]
pub fn BorderMarquee(text: String) -> impl IntoView {
    view! {
        <div class="frame">
            {STRIPS.iter().map(|(strip_class, text_class)| {
                view! {
                    <div class=*strip_class>
                        <p class=*text_class>{text.clone()}</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
