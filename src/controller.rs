//! Switch controller: carries out reducer effects against the injected seams.
//!
//! DESIGN
//! ======
//! The controller holds the last-known state and the two DOM seams. It never
//! awaits: [`SwitchController::dispatch`] applies URL and UI changes
//! synchronously and hands back the state a toggle request should be sent
//! for. The caller spawns that request, so a slow device never blocks the
//! page and a failed request never touches the UI.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SwitchConfig;
use crate::dom::{BrowserHistory, DomError, SwitchView};
use crate::error::ErrorCode;
use crate::state::{Effect, SwitchEvent, SwitchState, reduce};

pub struct SwitchController<V, H> {
    view: V,
    history: H,
    config: SwitchConfig,
    state: Option<SwitchState>,
}

impl<V, H> SwitchController<V, H>
where
    V: SwitchView,
    H: BrowserHistory,
{
    /// Create a controller with no known state. Call [`load`](Self::load)
    /// to pick up the initial path.
    pub fn new(view: V, history: H, config: SwitchConfig) -> Self {
        Self { view, history, config, state: None }
    }

    /// Last state derived from the URL or a user action.
    pub fn state(&self) -> Option<SwitchState> {
        self.state
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    fn history(&self) -> &H {
        &self.history
    }

    /// Reflect `state` in the checkbox and the bulb color.
    pub fn apply_state(&self, state: SwitchState) {
        self.view.set_checked(state.is_on());
        self.view.set_bulb_color(self.config.color_for(state));
    }

    /// Derive the initial state from the path the page was loaded at.
    /// An unrecognized path leaves state unknown and the UI untouched.
    pub fn load(&mut self) {
        let path = self.history.current_path();
        self.run(&SwitchEvent::Loaded { path });
    }

    /// Re-derive state from the current URL after back/forward.
    /// Unrecognized paths leave state and UI untouched.
    pub fn sync_from_location(&mut self) {
        let path = self.history.current_path();
        self.run(&SwitchEvent::Navigated { path });
    }

    /// Push `path` as a new history entry, then re-derive from it.
    ///
    /// # Errors
    ///
    /// Returns the history error if the push was refused. State and UI are
    /// not re-derived in that case.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), DomError> {
        self.history.push_path(path)?;
        self.sync_from_location();
        Ok(())
    }

    /// Handle one page event.
    ///
    /// Returns the state a toggle request should be sent for, if the event
    /// was a user action whose URL update went through.
    pub fn dispatch(&mut self, event: &SwitchEvent) -> Option<SwitchState> {
        log::debug!("switch event: {event:?}");
        self.run(event)
    }

    fn run(&mut self, event: &SwitchEvent) -> Option<SwitchState> {
        let previous = self.state;
        let transition = reduce(previous, event);
        self.state = transition.next;

        let mut request = None;
        for effect in transition.effects {
            match effect {
                Effect::PushPath(path) => {
                    if let Err(e) = self.navigate_to(path) {
                        log::warn!("[{}] {e}, keeping {previous:?}", e.error_code());
                        self.revert(previous);
                        return None;
                    }
                }
                Effect::Render(state) => self.apply_state(state),
                Effect::Request(state) => request = Some(state),
            }
        }
        request
    }

    /// The URL did not move, so the state and UI go back to match it.
    fn revert(&mut self, previous: Option<SwitchState>) {
        self.state = previous;
        if let Some(state) = previous {
            self.apply_state(state);
        }
    }
}
