//! web-sys implementations of the DOM seams.
//!
//! Elements are looked up once in [`DomSwitchView::acquire`] and held for
//! the life of the page. Setter failures are logged and swallowed: the page
//! keeps working even if a style write throws.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use super::{BrowserHistory, DomError, SwitchView};
use crate::config::SwitchConfig;

fn js_error(err: &JsValue) -> DomError {
    DomError::Js(format!("{err:?}"))
}

/// Checkbox plus the element carrying the bulb color custom property.
pub struct DomSwitchView {
    checkbox: HtmlInputElement,
    root: HtmlElement,
    bulb_property: String,
}

impl DomSwitchView {
    /// Look up the checkbox and the document element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] if the checkbox selector matches
    /// nothing (or matches a non-input) or the document has no root element.
    pub fn acquire(document: &Document, config: &SwitchConfig) -> Result<Self, DomError> {
        let checkbox = document
            .query_selector(&config.checkbox_selector)
            .map_err(|e| js_error(&e))?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| DomError::MissingElement { selector: config.checkbox_selector.clone() })?;

        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| DomError::MissingElement { selector: ":root".to_owned() })?;

        Ok(Self { checkbox, root, bulb_property: config.bulb_property.clone() })
    }

    pub fn checkbox(&self) -> &HtmlInputElement {
        &self.checkbox
    }
}

impl SwitchView for DomSwitchView {
    fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
    }

    fn set_bulb_color(&self, color: &str) {
        if let Err(e) = self.root.style().set_property(&self.bulb_property, color) {
            log::warn!("failed to set {}: {e:?}", self.bulb_property);
        }
    }
}

/// `window.location` and `window.history`.
pub struct WindowHistory {
    window: Window,
}

impl WindowHistory {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl BrowserHistory for WindowHistory {
    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn push_path(&self, path: &str) -> Result<(), DomError> {
        self.window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)))
            .map_err(|e| js_error(&e))
    }
}

/// Find a clickable trigger by id.
///
/// # Errors
///
/// Returns [`DomError::MissingElement`] if no element has `id`.
pub fn element_by_id(document: &Document, id: &str) -> Result<web_sys::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement { selector: format!("#{id}") })
}

/// Read `data-switch-*` overrides from the `<html>` element.
pub fn root_attribute(document: &Document, name: &str) -> Option<String> {
    document.document_element().and_then(|el| el.get_attribute(name))
}
