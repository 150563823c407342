//! The on/off value and its URL serialization.

#[cfg(test)]
#[path = "switch_test.rs"]
mod switch_test;

pub const ON_PATH: &str = "/on";
pub const OFF_PATH: &str = "/off";

pub const DEFAULT_ON_COLOR: &str = "#fff";
pub const DEFAULT_OFF_COLOR: &str = "#5a5a5a";

/// Desired state of the remote LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    /// Map a checkbox `checked` value onto a state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }

    /// Whether the checkbox should be checked for this state.
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// URL path that serializes this state. Also the toggle endpoint.
    pub fn path(self) -> &'static str {
        match self {
            Self::On => ON_PATH,
            Self::Off => OFF_PATH,
        }
    }

    /// Short lowercase label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for SwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive a state from a URL path.
///
/// Only the exact paths `/on` and `/off` are recognized. Anything else
/// returns `None`, which callers treat as "keep the current state" rather
/// than falling back to a default.
pub fn derive_state_from_path(path: &str) -> Option<SwitchState> {
    match path {
        ON_PATH => Some(SwitchState::On),
        OFF_PATH => Some(SwitchState::Off),
        _ => None,
    }
}
