//! # led-switch
//!
//! WASM controller for a single remote LED switch page.
//!
//! The page shows a checkbox, "on"/"off" buttons and a bulb whose color is a
//! CSS custom property. The URL path (`/on` or `/off`) is the source of
//! truth: user actions push a new path, the UI is re-derived from it, and a
//! GET to the matching endpoint tells the device. Browser back/forward
//! replays earlier paths without re-sending requests.
//!
//! Decision logic (`state`, `controller`, `config`, `net`) builds natively
//! and is unit tested without a browser. The `hydrate` feature adds the
//! web-sys bindings in `dom::web` and the start hook.

#[cfg(feature = "hydrate")]
pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod net;
pub mod state;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::error::ErrorCode;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    if let Err(e) = app::boot() {
        log::error!("[{}] switch startup failed: {e}", e.error_code());
    }
}
