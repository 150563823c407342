//! Shared error classification.
//!
//! Every error enum in the crate carries a grepable code so console output
//! can be filtered without matching on message text.

/// Grepable error code and retryable flag for logged failures.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
