//! Wall Models
//!
//! Notes, their frozen styles and their animation parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Visual attributes chosen once when a note is opened
#[derive(Debug, Clone, PartialEq)]
pub struct NoteStyle {
    pub font_family: String,
    pub font_size_px: u32,
    pub color: Rgb,
    pub font_weight: u32,
    pub italic: bool,
    pub underline: bool,
    pub uppercase: bool,
    pub letter_spacing_px: i32,
}

impl NoteStyle {
    /// Inline CSS declarations for this style
    pub fn to_css(&self) -> String {
        format!(
            "font-family: '{}'; font-size: {}px; color: {}; font-weight: {}; font-style: {}; text-decoration: {}; text-transform: {}; letter-spacing: {}px;",
            self.font_family,
            self.font_size_px,
            self.color,
            self.font_weight,
            if self.italic { "italic" } else { "normal" },
            if self.underline { "underline" } else { "none" },
            if self.uppercase { "uppercase" } else { "none" },
            self.letter_spacing_px,
        )
    }
}

/// One-shot animation played when a note is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceAnimation {
    PopIn,
    SlideIn,
    FadeIn,
    RotateIn,
    BounceIn,
}

impl EntranceAnimation {
    pub const ALL: [EntranceAnimation; 5] = [
        EntranceAnimation::PopIn,
        EntranceAnimation::SlideIn,
        EntranceAnimation::FadeIn,
        EntranceAnimation::RotateIn,
        EntranceAnimation::BounceIn,
    ];

    /// CSS class (and keyframes name) for this animation
    pub fn class_name(self) -> &'static str {
        match self {
            EntranceAnimation::PopIn => "pop-in",
            EntranceAnimation::SlideIn => "slide-in",
            EntranceAnimation::FadeIn => "fade-in",
            EntranceAnimation::RotateIn => "rotate-in",
            EntranceAnimation::BounceIn => "bounce-in",
        }
    }
}

/// Parameters of the looping drift motion, fixed at commit time
///
/// The shared `drift` keyframes pass through the three waypoints and return
/// to the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftMotion {
    pub id: String,
    pub waypoints: [(f64, f64); 3],
}

impl DriftMotion {
    /// CSS custom properties consumed by the `drift` keyframes
    pub fn to_css_vars(&self) -> String {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(i, (dx, dy))| format!("--drift-x{n}: {dx:.1}px; --drift-y{n}: {dy:.1}px;", n = i + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A note still open for typing
#[derive(Debug, Clone, PartialEq)]
pub struct DraftNote {
    pub id: u64,
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub style: NoteStyle,
    pub z_index: u32,
}

impl DraftNote {
    /// Whether the note has any visible text worth keeping
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Freeze the draft into a committed note
    pub fn commit(self, entrance: EntranceAnimation, drift: DriftMotion) -> Note {
        Note {
            id: self.id,
            x: self.x,
            y: self.y,
            text: self.text,
            style: self.style,
            z_index: self.z_index,
            entrance,
            drift,
        }
    }
}

/// A committed note; read-only for the rest of the session
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: u64,
    x: i32,
    y: i32,
    text: String,
    style: NoteStyle,
    z_index: u32,
    entrance: EntranceAnimation,
    drift: DriftMotion,
}

impl Note {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &NoteStyle {
        &self.style
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    pub fn entrance(&self) -> EntranceAnimation {
        self.entrance
    }

    pub fn drift(&self) -> &DriftMotion {
        &self.drift
    }
}
