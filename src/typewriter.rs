//! Title Animator
//!
//! One-shot typewriter reveal: one more character per tick until the whole
//! title shows, then it stays put.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character; false once nothing is left
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// One timer tick: the text to show and whether the timer can stop
    pub fn advance(&mut self) -> (String, bool) {
        self.tick();
        (self.visible(), self.is_done())
    }
}

/// Reveal `text` into `set_text` from a browser interval
///
/// The interval clears itself after the last character and is cleared when
/// the current owner is cleaned up.
pub fn use_title_reveal(text: &str, interval_ms: u32, set_text: WriteSignal<String>) {
    let typewriter = StoredValue::new(Typewriter::new(text));
    let handle = StoredValue::new(None::<IntervalHandle>);

    let started = set_interval_with_handle(
        move || {
            let done = typewriter
                .try_update_value(|typewriter| {
                    let (visible, done) = typewriter.advance();
                    set_text.set(visible);
                    done
                })
                .unwrap_or(true);
            if done {
                if let Some(interval) = handle.try_update_value(Option::take).flatten() {
                    interval.clear();
                    log::debug!("Title fully revealed");
                }
            }
        },
        Duration::from_millis(u64::from(interval_ms)),
    );

    match started {
        Ok(interval) => {
            handle.set_value(Some(interval));
            on_cleanup(move || interval.clear());
        }
        Err(e) => log::error!("Title reveal timer failed to start: {:?}", e),
    }
}
