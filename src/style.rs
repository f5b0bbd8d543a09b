//! Style Generator
//!
//! Random looks for new notes: font, color, weight and decorations when a
//! note is opened, entrance and drift parameters when it is committed.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::config::WallConfig;
use crate::models::{DriftMotion, EntranceAnimation, NoteStyle, Rgb};

/// Largest drift offset from the note's origin, in pixels
const DRIFT_AMPLITUDE_PX: f64 = 50.0;
/// Drift ids are `movement-<n>` with `n` below this bound
const DRIFT_ID_RANGE: u32 = 1_000_000;

/// Random style source over the configured palettes
pub struct StyleGenerator<R: Rng> {
    rng: R,
    fonts: Vec<String>,
    entrance_animations: Vec<EntranceAnimation>,
}

impl StyleGenerator<SmallRng> {
    /// Generator seeded from the page's own randomness
    pub fn from_page(config: &WallConfig) -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
        Self::new(SmallRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> StyleGenerator<R> {
    pub fn new(rng: R, config: &WallConfig) -> Self {
        Self {
            rng,
            fonts: config.fonts.clone(),
            entrance_animations: config.entrance_animations.clone(),
        }
    }

    pub fn generate_style(&mut self) -> NoteStyle {
        let font_family = self
            .fonts
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "sans-serif".to_string());

        NoteStyle {
            font_family,
            font_size_px: self.rng.random_range(12..=36),
            color: Rgb(self.rng.random(), self.rng.random(), self.rng.random()),
            font_weight: self.rng.random_range(100..=900),
            italic: self.rng.random_bool(0.5),
            underline: self.rng.random_bool(0.2),
            uppercase: self.rng.random_bool(0.2),
            letter_spacing_px: self.rng.random_range(-1..=2),
        }
    }

    pub fn generate_entrance_animation(&mut self) -> EntranceAnimation {
        self.entrance_animations
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(EntranceAnimation::FadeIn)
    }

    pub fn generate_drift_animation_id(&mut self) -> String {
        format!("movement-{}", self.rng.random_range(0..DRIFT_ID_RANGE))
    }

    /// Drift id plus three waypoints, each axis in `[-50, 50)` px
    pub fn generate_drift(&mut self) -> DriftMotion {
        let id = self.generate_drift_animation_id();
        let mut waypoint = || {
            (
                self.rng.random_range(-DRIFT_AMPLITUDE_PX..DRIFT_AMPLITUDE_PX),
                self.rng.random_range(-DRIFT_AMPLITUDE_PX..DRIFT_AMPLITUDE_PX),
            )
        };
        let waypoints = [waypoint(), waypoint(), waypoint()];
        DriftMotion { id, waypoints }
    }
}
