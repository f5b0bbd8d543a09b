//! Interaction Controller
//!
//! Idle/Composing state machine over clicks, edits and Enter presses.
//! At most one draft exists; committed notes only ever get appended.

use rand::Rng;
use reactive_stores::Store;

use crate::models::{DraftNote, Note};
use crate::style::StyleGenerator;

/// Where a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Anywhere on the wall, committed notes included
    Wall,
    /// The input of the note being composed
    ActiveInput,
}

/// Input the wall reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum WallEvent {
    Click { x: i32, y: i32, target: PointerTarget },
    Edit(String),
    Enter,
}

/// Outcome of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened { id: u64 },
    CommittedAndOpened { committed: u64, opened: u64 },
    DiscardedAndOpened { discarded: u64, opened: u64 },
    Committed { id: u64 },
    Edited,
    Ignored,
}

impl Transition {
    fn log(self) {
        match self {
            Transition::Opened { id } => log::debug!("Opened draft #{}", id),
            Transition::CommittedAndOpened { committed, opened } => {
                log::debug!("Committed #{}, opened draft #{}", committed, opened)
            }
            Transition::DiscardedAndOpened { discarded, opened } => {
                log::debug!("Discarded blank draft #{}, opened draft #{}", discarded, opened)
            }
            Transition::Committed { id } => log::debug!("Committed #{}, wall idle", id),
            Transition::Edited | Transition::Ignored => {}
        }
    }
}

/// Replace the open draft's text; the only transition that touches nothing
/// but the draft
pub fn apply_edit(draft: &mut Option<DraftNote>, text: String) -> Transition {
    match draft.as_mut() {
        Some(draft) => {
            draft.text = text;
            Transition::Edited
        }
        None => Transition::Ignored,
    }
}

/// All wall state, owned by one component instance
#[derive(Clone, Debug, Store)]
pub struct Wall {
    committed: Vec<Note>,
    draft: Option<DraftNote>,
    max_z_index: u32,
    next_id: u64,
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}

impl Wall {
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            draft: None,
            max_z_index: 1,
            next_id: 1,
        }
    }

    #[cfg(test)]
    pub fn committed(&self) -> &[Note] {
        &self.committed
    }

    #[cfg(test)]
    pub fn draft(&self) -> Option<&DraftNote> {
        self.draft.as_ref()
    }

    #[cfg(test)]
    pub fn is_composing(&self) -> bool {
        self.draft.is_some()
    }

    #[cfg(test)]
    pub fn max_z_index(&self) -> u32 {
        self.max_z_index
    }

    pub fn handle<R: Rng>(&mut self, event: WallEvent, gen: &mut StyleGenerator<R>) -> Transition {
        let transition = match event {
            WallEvent::Click { target: PointerTarget::ActiveInput, .. } => Transition::Ignored,
            WallEvent::Click { x, y, target: PointerTarget::Wall } => self.place(x, y, gen),
            WallEvent::Edit(text) => apply_edit(&mut self.draft, text),
            WallEvent::Enter => match self.draft.take() {
                Some(draft) if draft.has_content() => {
                    let id = self.commit(draft, gen);
                    Transition::Committed { id }
                }
                other => {
                    self.draft = other;
                    Transition::Ignored
                }
            },
        };
        transition.log();
        transition
    }

    /// Settle any open draft, then open a new one at `(x, y)`
    fn place<R: Rng>(&mut self, x: i32, y: i32, gen: &mut StyleGenerator<R>) -> Transition {
        let previous = self.draft.take().map(|draft| {
            if draft.has_content() {
                Ok(self.commit(draft, gen))
            } else {
                Err(draft.id)
            }
        });

        self.max_z_index += 1;
        let id = self.next_id;
        self.next_id += 1;
        self.draft = Some(DraftNote {
            id,
            x,
            y,
            text: String::new(),
            style: gen.generate_style(),
            z_index: self.max_z_index,
        });

        match previous {
            None => Transition::Opened { id },
            Some(Ok(committed)) => Transition::CommittedAndOpened { committed, opened: id },
            Some(Err(discarded)) => Transition::DiscardedAndOpened { discarded, opened: id },
        }
    }

    fn commit<R: Rng>(&mut self, draft: DraftNote, gen: &mut StyleGenerator<R>) -> u64 {
        let entrance = gen.generate_entrance_animation();
        let drift = gen.generate_drift();
        let note = draft.commit(entrance, drift);
        log::info!(
            "Committed note #{} at ({}, {}) with {}",
            note.id(),
            note.position().0,
            note.position().1,
            entrance.class_name()
        );
        let id = note.id();
        self.committed.push(note);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WallConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn generator() -> StyleGenerator<SmallRng> {
        StyleGenerator::new(SmallRng::seed_from_u64(42), &WallConfig::default())
    }

    fn click(x: i32, y: i32) -> WallEvent {
        WallEvent::Click { x, y, target: PointerTarget::Wall }
    }

    fn edit(text: &str) -> WallEvent {
        WallEvent::Edit(text.to_string())
    }

    #[test]
    fn test_click_while_idle_opens_draft() {
        let mut gen = generator();
        let mut wall = Wall::new();
        assert!(!wall.is_composing());

        let t = wall.handle(click(5, 6), &mut gen);
        let draft = wall.draft().unwrap();
        assert_eq!(t, Transition::Opened { id: draft.id });
        assert_eq!((draft.x, draft.y), (5, 6));
        assert_eq!(draft.text, "");
        assert_eq!(draft.z_index, 2);
        assert!(wall.committed().is_empty());
    }

    #[test]
    fn test_type_then_click_elsewhere() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(50, 50), &mut gen);
        wall.handle(edit("hi"), &mut gen);
        let t = wall.handle(click(200, 80), &mut gen);
        assert!(matches!(t, Transition::CommittedAndOpened { .. }));

        assert_eq!(wall.committed().len(), 1);
        let note = &wall.committed()[0];
        assert_eq!(note.text(), "hi");
        assert_eq!(note.position(), (50, 50));
        assert_eq!(note.z_index(), 2);
        assert!(note.drift().id.starts_with("movement-"));

        let draft = wall.draft().unwrap();
        assert_eq!((draft.x, draft.y), (200, 80));
        assert_eq!(draft.text, "");
        assert_eq!(draft.z_index, 3);
    }

    #[test]
    fn test_enter_on_empty_draft_is_noop() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(10, 10), &mut gen);
        let before = wall.draft().cloned();

        assert_eq!(wall.handle(WallEvent::Enter, &mut gen), Transition::Ignored);
        assert!(wall.committed().is_empty());
        assert_eq!(wall.draft().cloned(), before);
        assert_eq!(wall.draft().map(|d| (d.x, d.y)), Some((10, 10)));
    }

    #[test]
    fn test_enter_on_whitespace_draft_is_noop() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(1, 1), &mut gen);
        wall.handle(edit("   \t"), &mut gen);
        assert_eq!(wall.handle(WallEvent::Enter, &mut gen), Transition::Ignored);
        assert!(wall.committed().is_empty());
        assert_eq!(wall.draft().unwrap().text, "   \t");
    }

    #[test]
    fn test_enter_commits_and_goes_idle() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(30, 40), &mut gen);
        let style = wall.draft().unwrap().style.clone();
        wall.handle(edit(" hello "), &mut gen);

        let t = wall.handle(WallEvent::Enter, &mut gen);
        assert!(matches!(t, Transition::Committed { .. }));
        assert!(!wall.is_composing());
        assert_eq!(wall.committed().len(), 1);
        assert_eq!(wall.committed()[0].text(), " hello ");
        assert_eq!(wall.committed()[0].style(), &style);
    }

    #[test]
    fn test_click_discards_blank_draft() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(1, 2), &mut gen);
        wall.handle(edit("  "), &mut gen);
        let t = wall.handle(click(3, 4), &mut gen);

        assert!(matches!(t, Transition::DiscardedAndOpened { .. }));
        assert!(wall.committed().is_empty());
        let draft = wall.draft().unwrap();
        assert_eq!((draft.x, draft.y), (3, 4));
        assert_eq!(draft.z_index, 3);
    }

    #[test]
    fn test_click_on_active_input_is_swallowed() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(7, 8), &mut gen);
        wall.handle(edit("caret"), &mut gen);
        let before = wall.clone();

        let t = wall.handle(WallEvent::Click { x: 9, y: 9, target: PointerTarget::ActiveInput }, &mut gen);
        assert_eq!(t, Transition::Ignored);
        assert_eq!(wall.draft(), before.draft());
        assert_eq!(wall.committed(), before.committed());
        assert_eq!(wall.max_z_index(), before.max_z_index());
    }

    #[test]
    fn test_edit_and_enter_while_idle_are_ignored() {
        let mut gen = generator();
        let mut wall = Wall::new();
        assert_eq!(wall.handle(edit("x"), &mut gen), Transition::Ignored);
        assert_eq!(wall.handle(WallEvent::Enter, &mut gen), Transition::Ignored);
        assert!(!wall.is_composing());
        assert_eq!(wall.max_z_index(), 1);
    }

    #[test]
    fn test_edit_keeps_text_verbatim() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(0, 0), &mut gen);
        let long = format!("  {}  ", "涂鸦".repeat(500));
        assert_eq!(wall.handle(edit(&long), &mut gen), Transition::Edited);
        assert_eq!(wall.draft().unwrap().text, long);
    }

    #[test]
    fn test_apply_edit_only_touches_draft() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(0, 0), &mut gen);
        wall.handle(edit("first"), &mut gen);
        wall.handle(click(5, 5), &mut gen);
        let committed = wall.committed().to_vec();

        let mut draft = wall.draft().cloned();
        assert_eq!(apply_edit(&mut draft, "second".to_string()), Transition::Edited);
        assert_eq!(draft.as_ref().map(|d| d.text.as_str()), Some("second"));
        assert_eq!(draft.as_ref().map(|d| (d.x, d.y)), Some((5, 5)));
        assert_eq!(wall.committed(), committed.as_slice());

        let mut idle: Option<DraftNote> = None;
        assert_eq!(apply_edit(&mut idle, "lost".to_string()), Transition::Ignored);
        assert!(idle.is_none());
    }

    #[test]
    fn test_z_index_strictly_increasing() {
        let mut gen = generator();
        let mut wall = Wall::new();
        for i in 0..50 {
            wall.handle(click(i, i * 2), &mut gen);
            match i % 4 {
                0 => {
                    wall.handle(edit("note"), &mut gen);
                }
                1 => {
                    wall.handle(edit("enter"), &mut gen);
                    wall.handle(WallEvent::Enter, &mut gen);
                }
                2 => {
                    wall.handle(edit(" "), &mut gen);
                }
                _ => {}
            }
        }
        let z: Vec<u32> = wall.committed().iter().map(|n| n.z_index()).collect();
        assert!(!z.is_empty());
        assert!(z.windows(2).all(|w| w[0] < w[1]));
        if let Some(draft) = wall.draft() {
            assert!(draft.z_index > *z.last().unwrap());
        }
    }

    #[test]
    fn test_each_commit_appends_exactly_one() {
        let mut gen = generator();
        let mut wall = Wall::new();
        wall.handle(click(0, 0), &mut gen);
        for i in 1..=10 {
            wall.handle(edit(&format!("n{}", i)), &mut gen);
            let before = wall.committed().len();
            wall.handle(click(i, i), &mut gen);
            assert_eq!(wall.committed().len(), before + 1);
            assert!(wall.is_composing());
        }
        let ids: Vec<u64> = wall.committed().iter().map(|n| n.id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
