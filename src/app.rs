//! Browser bootstrap: binds the controller to the live page.
//!
//! Runs once from the wasm start hook. If the document has already finished
//! loading the page is wired immediately, otherwise on `load`. Listeners are
//! leaked with `forget` and live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, EventTarget, Window};

use crate::config::{ConfigError, SwitchConfig};
use crate::controller::SwitchController;
use crate::dom::DomError;
use crate::dom::web::{self, DomSwitchView, WindowHistory};
use crate::error::ErrorCode;
use crate::net::request_toggle;
use crate::net::toggle::GlooToggleClient;
use crate::state::{SwitchEvent, SwitchState};

type SharedController = Rc<RefCell<SwitchController<DomSwitchView, WindowHistory>>>;

/// Error returned by [`boot`].
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl ErrorCode for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Dom(e) => e.error_code(),
        }
    }
}

/// Wire the switch page now or once `load` fires.
///
/// # Errors
///
/// Returns an error if there is no window/document, or if the page is
/// already loaded and binding fails.
pub fn boot() -> Result<(), StartupError> {
    let window = web_sys::window().ok_or_else(|| DomError::Js("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| DomError::Js("no document".to_owned()))?;

    if document.ready_state() == "complete" {
        return initialize(&window, &document);
    }

    let target: &EventTarget = &window;
    let win = window.clone();
    listen(target, "load", move |_| {
        if let Err(e) = initialize(&win, &document) {
            log::error!("[{}] switch startup failed: {e}", e.error_code());
        }
    })?;
    Ok(())
}

fn initialize(window: &Window, document: &Document) -> Result<(), StartupError> {
    let config = SwitchConfig::from_lookup(|key| web::root_attribute(document, key))?;
    let view = DomSwitchView::acquire(document, &config)?;
    let checkbox = view.checkbox().clone();
    let on_button = web::element_by_id(document, &config.on_button_id)?;
    let off_button = web::element_by_id(document, &config.off_button_id)?;

    let controller: SharedController =
        Rc::new(RefCell::new(SwitchController::new(view, WindowHistory::new(window.clone()), config)));
    controller.borrow_mut().load();

    {
        let controller = Rc::clone(&controller);
        let input = checkbox.clone();
        listen(&checkbox, "change", move |_| {
            dispatch(&controller, &SwitchEvent::CheckboxChanged { checked: input.checked() });
        })?;
    }

    for (button, state) in [(on_button, SwitchState::On), (off_button, SwitchState::Off)] {
        let controller = Rc::clone(&controller);
        listen(&button, "click", move |ev: Event| {
            ev.prevent_default();
            dispatch(&controller, &SwitchEvent::ButtonClicked(state));
        })?;
    }

    {
        let controller = Rc::clone(&controller);
        listen(window, "popstate", move |_| {
            controller.borrow_mut().sync_from_location();
        })?;
    }

    log::info!("switch ready, state: {:?}", controller.borrow().state());
    Ok(())
}

/// Run the event through the controller, then send any toggle request in
/// the background. The borrow ends before the request is spawned.
fn dispatch(controller: &SharedController, event: &SwitchEvent) {
    let (request, config) = {
        let mut ctrl = controller.borrow_mut();
        (ctrl.dispatch(event), ctrl.config().clone())
    };
    if let Some(state) = request {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = request_toggle(&GlooToggleClient, &config, state).await {
                log::debug!("toggle to {state} not confirmed: {}", e.error_code());
            }
        });
    }
}

fn listen<F>(target: &EventTarget, name: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
        .map_err(|e| DomError::Js(format!("{e:?}")))?;
    cb.forget();
    Ok(())
}
