//! Pure reducer from (current state, event) to the next state plus effects.
//!
//! DESIGN
//! ======
//! The reducer never performs side effects. It describes them as [`Effect`]
//! values and the controller carries them out in order. User actions update
//! the URL first and let the UI follow from the URL, so the rendered state
//! always matches what the address bar says.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use super::switch::{SwitchState, derive_state_from_path};

/// Something that happened on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchEvent {
    /// Page finished loading with this path.
    Loaded { path: String },
    /// Browser back/forward restored this path.
    Navigated { path: String },
    /// The checkbox changed and now reads `checked`.
    CheckboxChanged { checked: bool },
    /// The "on" or "off" button was clicked.
    ButtonClicked(SwitchState),
}

/// Side effect requested by [`reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Push a history entry for this path, then re-derive from the URL.
    PushPath(&'static str),
    /// Reflect this state in the checkbox and bulb color.
    Render(SwitchState),
    /// Send the toggle request for this state.
    Request(SwitchState),
}

/// Result of one reducer step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: Option<SwitchState>,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(current: Option<SwitchState>) -> Self {
        Self { next: current, effects: Vec::new() }
    }

    /// The state a toggle request should be sent for, if any.
    pub fn request(&self) -> Option<SwitchState> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Request(state) => Some(*state),
            _ => None,
        })
    }
}

/// Compute the next state and the effects for `event`.
pub fn reduce(current: Option<SwitchState>, event: &SwitchEvent) -> Transition {
    match event {
        SwitchEvent::Loaded { path } | SwitchEvent::Navigated { path } => match derive_state_from_path(path) {
            Some(state) => Transition { next: Some(state), effects: vec![Effect::Render(state)] },
            None => Transition::unchanged(current),
        },
        SwitchEvent::CheckboxChanged { checked } => user_action(SwitchState::from_checked(*checked)),
        SwitchEvent::ButtonClicked(state) => user_action(*state),
    }
}

fn user_action(target: SwitchState) -> Transition {
    Transition { next: Some(target), effects: vec![Effect::PushPath(target.path()), Effect::Request(target)] }
}
