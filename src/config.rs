//! Wall Configuration
//!
//! Embedded display strings and palettes, optionally overridden by a
//! `<script type="application/json" id="wall-config">` block in the page.

use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::models::EntranceAnimation;

/// Element id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "wall-config";

const DEFAULT_FONTS: &[&str] = &[
    "Arial", "Helvetica", "Times New Roman", "Courier", "Verdana",
    "Georgia", "Palatino", "Garamond", "Bookman", "Comic Sans MS",
    "Trebuchet MS", "Arial Black", "Impact",
];

const DEFAULT_TITLE: &str = "随机字体涂鸦墙";
const DEFAULT_MARQUEE: &str = "点击任意位置直接输入文字，按回车键或点击新位置确认。可以在已有文字上继续添加。";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub fonts: Vec<String>,
    pub entrance_animations: Vec<EntranceAnimation>,
    pub title_text: String,
    pub marquee_text: String,
    pub typewriter_interval_ms: u32,
    /// Length of one full drift loop
    pub drift_period_secs: u32,
    pub log_level: String,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            fonts: DEFAULT_FONTS.iter().map(|f| f.to_string()).collect(),
            entrance_animations: EntranceAnimation::ALL.to_vec(),
            title_text: DEFAULT_TITLE.to_string(),
            marquee_text: DEFAULT_MARQUEE.to_string(),
            typewriter_interval_ms: 200,
            drift_period_secs: 20,
            log_level: "info".to_string(),
        }
    }
}

impl WallConfig {
    /// Parse and validate a JSON override; absent fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WallConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fonts.is_empty() {
            return Err(ConfigError::EmptyFonts);
        }
        if self.entrance_animations.is_empty() {
            return Err(ConfigError::EmptyEntranceAnimations);
        }
        if self.typewriter_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.drift_period_secs == 0 {
            return Err(ConfigError::ZeroDriftPeriod);
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Load the page override, falling back to defaults
    ///
    /// Returns the config plus the error that forced a fallback, if any, so
    /// the caller can report it once logging is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let json = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }
}
