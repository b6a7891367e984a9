//! Page configuration.
//!
//! Every field has a default matching the stock site markup, so a page only
//! needs to declare what differs. Overrides come from an inline JSON block
//! (`<script type="application/json" id="site-enhance-config">`) and are
//! merged key by key onto the defaults, nested blocks included.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Log verbosity for the browser console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn to_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

/// Intersection observer tuning for one behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub navbar_id: String,
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub reveal_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    pub anchor_selector: String,
    pub stagger_container_selector: String,
    pub reveal: ObserverConfig,
    pub sections: ObserverConfig,
    pub navbar_scroll_threshold_px: f64,
    pub stagger_step_secs: f64,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_string(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_string(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_string(),
            navbar_id: consts::NAVBAR_ID.to_string(),
            nav_toggle_id: consts::NAV_TOGGLE_ID.to_string(),
            nav_menu_id: consts::NAV_MENU_ID.to_string(),
            reveal_selector: consts::REVEAL_SELECTOR.to_string(),
            section_selector: consts::SECTION_SELECTOR.to_string(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_string(),
            anchor_selector: consts::ANCHOR_SELECTOR.to_string(),
            stagger_container_selector: consts::STAGGER_CONTAINER_SELECTOR.to_string(),
            reveal: ObserverConfig {
                threshold: consts::REVEAL_THRESHOLD,
                root_margin: consts::REVEAL_ROOT_MARGIN.to_string(),
            },
            sections: ObserverConfig {
                threshold: consts::SECTION_THRESHOLD,
                root_margin: consts::SECTION_ROOT_MARGIN.to_string(),
            },
            navbar_scroll_threshold_px: consts::NAVBAR_SCROLL_THRESHOLD_PX,
            stagger_step_secs: consts::STAGGER_STEP_SECS,
            log_level: LogLevel::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block and validate the merged result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: Value = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields are usable by the observers and scroll handler.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("reveal.threshold", self.reveal.threshold)?;
        check_threshold("sections.threshold", self.sections.threshold)?;
        if !self.navbar_scroll_threshold_px.is_finite() || self.navbar_scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "navbar_scroll_threshold_px",
                reason: format!("expected a non-negative number, got {}", self.navbar_scroll_threshold_px),
            });
        }
        if !self.stagger_step_secs.is_finite() || self.stagger_step_secs < 0.0 {
            return Err(ConfigError::Invalid {
                field: "stagger_step_secs",
                reason: format!("expected a non-negative number, got {}", self.stagger_step_secs),
            });
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty".to_string() });
        }
        if self.theme_attribute.is_empty() {
            return Err(ConfigError::Invalid { field: "theme_attribute", reason: "must not be empty".to_string() });
        }
        Ok(())
    }
}

/// Overlay `overrides` onto `base`. Objects merge per key; anything else replaces.
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a value in [0, 1], got {value}") })
    }
}
