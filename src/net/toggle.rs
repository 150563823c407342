//! Toggle request to the `/on` and `/off` endpoints.
//!
//! Client-side (hydrate): [`GlooToggleClient`] issues the GET via `gloo-net`.
//! Tests supply their own [`ToggleClient`].
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged here and returned to the caller. Nothing retries and
//! nothing reverts the UI: the page already shows the requested state by the
//! time the request is sent.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::SwitchConfig;
use crate::error::ErrorCode;
use crate::state::SwitchState;

/// Error returned by [`request_toggle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    /// The request never produced a response (network, DNS, CORS).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The device answered with a non-2xx status.
    #[error("toggle rejected: status {status}")]
    Status { status: u16 },
}

impl ErrorCode for ToggleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TOGGLE_TRANSPORT",
            Self::Status { .. } => "E_TOGGLE_STATUS",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599 })
    }
}

/// Issues a bodiless GET and reports the HTTP status.
#[async_trait::async_trait(?Send)]
pub trait ToggleClient {
    /// # Errors
    ///
    /// Returns [`ToggleError::Transport`] when no response arrives.
    async fn get(&self, url: &str) -> Result<u16, ToggleError>;
}

fn success_message(state: SwitchState) -> String {
    format!("LED {state} successfully.")
}

fn failure_message(state: SwitchState) -> String {
    format!("Failed to toggle LED to {state}.")
}

fn transport_message(err: &str) -> String {
    format!("Error toggling LED: {err}")
}

/// Send the toggle request for `state` and log the outcome.
///
/// # Errors
///
/// Returns [`ToggleError::Status`] for a non-2xx response and
/// [`ToggleError::Transport`] if the request failed outright.
pub async fn request_toggle<C>(client: &C, config: &SwitchConfig, state: SwitchState) -> Result<(), ToggleError>
where
    C: ToggleClient + ?Sized,
{
    let url = config.endpoint_for(state);
    match client.get(&url).await {
        Ok(status) if (200..300).contains(&status) => {
            log::info!("{}", success_message(state));
            Ok(())
        }
        Ok(status) => {
            let err = ToggleError::Status { status };
            log::error!("{} [{}] {err}", failure_message(state), err.error_code());
            Err(err)
        }
        Err(ToggleError::Transport(msg)) => {
            log::error!("{}", transport_message(&msg));
            Err(ToggleError::Transport(msg))
        }
        Err(err) => {
            log::error!("{} [{}] {err}", failure_message(state), err.error_code());
            Err(err)
        }
    }
}

/// Same-origin (or configured base) GET via the browser's `fetch`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooToggleClient;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl ToggleClient for GlooToggleClient {
    async fn get(&self, url: &str) -> Result<u16, ToggleError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ToggleError::Transport(e.to_string()))?;
        Ok(resp.status())
    }
}
