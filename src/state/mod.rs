//! Switch state and the pure transition function that drives it.
//!
//! DESIGN
//! ======
//! Nothing in this module touches the browser. The controller owns the
//! last-known state and feeds it through [`transition::reduce`] for every
//! event, so the decision logic is testable natively.

pub mod switch;
pub mod transition;

pub use switch::{SwitchState, derive_state_from_path};
pub use transition::{Effect, SwitchEvent, Transition, reduce};
