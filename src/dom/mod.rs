//! Seams between the controller and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only sees these traits. `web` implements them over
//! web-sys handles acquired once at startup; tests implement them with
//! in-memory recorders.

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::error::ErrorCode;

/// The two UI affordances that mirror the switch state.
pub trait SwitchView {
    fn set_checked(&self, checked: bool);
    fn set_bulb_color(&self, color: &str);
}

/// Read and push the current URL path without reloading.
pub trait BrowserHistory {
    fn current_path(&self) -> String;
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the browser refused the new entry.
    fn push_path(&self, path: &str) -> Result<(), DomError>;
}

/// Failure binding to the page's DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element matched the selector or id.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// A browser API call threw.
    #[error("browser API failed: {0}")]
    Js(String),
}

impl ErrorCode for DomError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement { .. } => "E_MISSING_ELEMENT",
            Self::Js(_) => "E_JS",
        }
    }
}
