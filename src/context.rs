//! Wall Context
//!
//! The wall store and its style generator, shared with child components.

use leptos::prelude::*;
use rand::rngs::SmallRng;
use reactive_stores::Store;

use crate::style::StyleGenerator;
use crate::wall::{apply_edit, PointerTarget, Transition, Wall, WallEvent, WallStoreFields};

#[derive(Clone, Copy)]
pub struct WallContext {
    /// Notes and the open draft
    pub store: Store<Wall>,
    generator: StoredValue<StyleGenerator<SmallRng>>,
}

impl WallContext {
    pub fn new(store: Store<Wall>, generator: StoredValue<StyleGenerator<SmallRng>>) -> Self {
        Self { store, generator }
    }

    /// Feed one input event through the wall state machine
    ///
    /// Keystrokes only notify the draft field, so the committed list is not
    /// re-read while typing.
    pub fn dispatch(&self, event: WallEvent) -> Transition {
        let store = self.store;
        let event = match event {
            WallEvent::Edit(text) => {
                let mut transition = Transition::Ignored;
                store.draft().update(|draft| transition = apply_edit(draft, text));
                return transition;
            }
            WallEvent::Click { target: PointerTarget::ActiveInput, .. } => return Transition::Ignored,
            other => other,
        };
        self.generator
            .try_update_value(|gen| {
                let mut transition = Transition::Ignored;
                store.update(|wall| transition = wall.handle(event, gen));
                transition
            })
            .unwrap_or(Transition::Ignored)
    }
}

pub fn use_wall_context() -> WallContext {
    expect_context::<WallContext>()
}
