//! UI Components
//!
//! Leptos components that draw the wall.

mod border_marquee;
mod note_input;
mod note_view;
mod title_banner;

pub use border_marquee::BorderMarquee;
pub use note_input::NoteInput;
pub use note_view::NoteView;
pub use title_banner::TitleBanner;
