//! Runtime configuration.
//!
//! Pages may embed a `<script id="ui-config" type="application/json">` block
//! to override timings. Every field is optional; anything missing keeps its
//! default from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FADE_DELAY_MS, FADE_DURATION_MS, FLASH_DELAY_MS, FLASH_REMOVAL_MS, LOCKOUT_MS, REVEAL_THRESHOLD, RIPPLE_MS,
    RIPPLE_SCALE, THEME_STORAGE_KEY,
};
use crate::error::UiError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// `localStorage` key for the theme preference.
    pub storage_key: String,
    pub flash_delay_ms: u32,
    pub flash_removal_ms: u32,
    pub ripple_ms: u32,
    pub ripple_scale: f64,
    pub lockout_ms: u32,
    pub fade_delay_ms: u32,
    pub fade_duration_ms: u32,
    /// Visible fraction in `[0, 1]` at which a card is revealed.
    pub reveal_threshold: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            flash_delay_ms: FLASH_DELAY_MS,
            flash_removal_ms: FLASH_REMOVAL_MS,
            ripple_ms: RIPPLE_MS,
            ripple_scale: RIPPLE_SCALE,
            lockout_ms: LOCKOUT_MS,
            fade_delay_ms: FADE_DELAY_MS,
            fade_duration_ms: FADE_DURATION_MS,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

impl UiConfig {
    /// Parse a JSON object into a config, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// Like [`UiConfig::from_json`], but logs and falls back to defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: {err}; using defaults");
                Self::default()
            }
        }
    }

    fn normalize(&mut self) {
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            REVEAL_THRESHOLD
        };
        if !self.ripple_scale.is_finite() || self.ripple_scale <= 0.0 {
            self.ripple_scale = RIPPLE_SCALE;
        }
        if self.storage_key.trim().is_empty() {
            THEME_STORAGE_KEY.clone_into(&mut self.storage_key);
        }
    }
}
