//! Page wiring configuration.
//!
//! Defaults match the stock switch page. A host page can override any field
//! with a `data-switch-*` attribute on the `<html>` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ErrorCode;
use crate::state::SwitchState;
use crate::state::switch::{DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};

pub const DEFAULT_CHECKBOX_SELECTOR: &str = ".switch input";
pub const DEFAULT_ON_BUTTON_ID: &str = "onButton";
pub const DEFAULT_OFF_BUTTON_ID: &str = "offButton";
pub const DEFAULT_BULB_PROPERTY: &str = "--light-bulb-color";

pub const KEY_CHECKBOX: &str = "data-switch-checkbox";
pub const KEY_ON_BUTTON: &str = "data-switch-on-button";
pub const KEY_OFF_BUTTON: &str = "data-switch-off-button";
pub const KEY_BULB_PROPERTY: &str = "data-switch-bulb-property";
pub const KEY_ON_COLOR: &str = "data-switch-on-color";
pub const KEY_OFF_COLOR: &str = "data-switch-off-color";
pub const KEY_ENDPOINT: &str = "data-switch-endpoint";

/// Error returned by [`SwitchConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The key was present but held only whitespace.
    #[error("config value for {key} is blank")]
    Blank { key: String },

    /// The bulb property is not a CSS custom property name.
    #[error("bulb property must start with `--`: {value}")]
    InvalidProperty { value: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Blank { .. } => "E_CONFIG_BLANK",
            Self::InvalidProperty { .. } => "E_CONFIG_INVALID_PROPERTY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchConfig {
    pub checkbox_selector: String,
    pub on_button_id: String,
    pub off_button_id: String,
    pub bulb_property: String,
    pub on_color: String,
    pub off_color: String,
    /// Prefix for the toggle endpoints. Empty means same origin.
    pub endpoint_base: String,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            checkbox_selector: DEFAULT_CHECKBOX_SELECTOR.to_owned(),
            on_button_id: DEFAULT_ON_BUTTON_ID.to_owned(),
            off_button_id: DEFAULT_OFF_BUTTON_ID.to_owned(),
            bulb_property: DEFAULT_BULB_PROPERTY.to_owned(),
            on_color: DEFAULT_ON_COLOR.to_owned(),
            off_color: DEFAULT_OFF_COLOR.to_owned(),
            endpoint_base: String::new(),
        }
    }
}

impl SwitchConfig {
    /// Build a config from a key lookup.
    ///
    /// Keys (all optional, defaults in parentheses):
    /// - `data-switch-checkbox` (`.switch input`)
    /// - `data-switch-on-button` (`onButton`)
    /// - `data-switch-off-button` (`offButton`)
    /// - `data-switch-bulb-property` (`--light-bulb-color`)
    /// - `data-switch-on-color` (`#fff`)
    /// - `data-switch-off-color` (`#5a5a5a`)
    /// - `data-switch-endpoint` (empty, same origin)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Blank`] for a present but blank value (except
    /// the endpoint, where blank means same origin) and
    /// [`ConfigError::InvalidProperty`] for a bulb property without `--`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bulb_property = required(&lookup, KEY_BULB_PROPERTY, DEFAULT_BULB_PROPERTY)?;
        if !bulb_property.starts_with("--") {
            return Err(ConfigError::InvalidProperty { value: bulb_property });
        }

        let endpoint_base = lookup(KEY_ENDPOINT)
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();

        Ok(Self {
            checkbox_selector: required(&lookup, KEY_CHECKBOX, DEFAULT_CHECKBOX_SELECTOR)?,
            on_button_id: required(&lookup, KEY_ON_BUTTON, DEFAULT_ON_BUTTON_ID)?,
            off_button_id: required(&lookup, KEY_OFF_BUTTON, DEFAULT_OFF_BUTTON_ID)?,
            bulb_property,
            on_color: required(&lookup, KEY_ON_COLOR, DEFAULT_ON_COLOR)?,
            off_color: required(&lookup, KEY_OFF_COLOR, DEFAULT_OFF_COLOR)?,
            endpoint_base,
        })
    }

    /// Bulb color for `state`.
    pub fn color_for(&self, state: SwitchState) -> &str {
        match state {
            SwitchState::On => &self.on_color,
            SwitchState::Off => &self.off_color,
        }
    }

    /// Toggle request URL for `state`.
    pub fn endpoint_for(&self, state: SwitchState) -> String {
        format!("{}{}", self.endpoint_base, state.path())
    }
}

fn required<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_owned()),
        Some(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                Err(ConfigError::Blank { key: key.to_owned() })
            } else {
                Ok(value.to_owned())
            }
        }
    }
}
