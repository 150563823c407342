//! Outbound HTTP to the switch device.

pub mod toggle;

pub use toggle::{ToggleClient, ToggleError, request_toggle};
