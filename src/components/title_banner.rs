//! Title Banner Component
//!
//! Floating typewriter title with five dots circling it.

use std::f64::consts::TAU;

use leptos::prelude::*;

use crate::typewriter::use_title_reveal;

const ORBIT_DOT_COUNT: usize = 5;

/// Placement of one decorative dot around the banner
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitDot {
    pub hue: u32,
    pub top_px: f64,
    pub left_px: f64,
    pub delay_secs: f64,
}

impl OrbitDot {
    fn to_css(&self) -> String {
        format!(
            "background-color: hsl({}, 70%, 50%); top: {:.2}px; left: {:.2}px; animation-delay: {:.1}s;",
            self.hue, self.top_px, self.left_px, self.delay_secs
        )
    }
}

/// Dots evenly spaced on an ellipse, hues spread around the wheel
pub fn orbit_dots(count: usize) -> Vec<OrbitDot> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            OrbitDot {
                hue: (i * 360 / count) as u32,
                top_px: angle.sin() * 40.0,
                left_px: angle.cos() * 100.0 + 100.0,
                delay_secs: i as f64 * 0.2,
            }
        })
        .collect()
}

#[component]
pub fn TitleBanner(title: String, interval_ms: u32) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    use_title_reveal(&title, interval_ms, set_text);

    view! {
        <div class="title-layer">
            <div class="title-anchor">
                <h1 class="title-banner float">
                    {text}
                    <span class="caret">"|"</span>
                </h1>
                {orbit_dots(ORBIT_DOT_COUNT)
                    .into_iter()
                    .map(|dot| view! { <div class="orbit-dot float" style=dot.to_css()></div> })
                    .collect_view()}
            </div>
        </div>
    }
}
