//! Shared error types and utilities for the fitcoach project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure modes of the dual-service sign-in saga. The variant names which
/// step rejected; a `Secondary` failure guarantees the primary token was
/// discarded, never persisted.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Primary(ApiError),
    #[error("Secondary sign-in failed: {0}")]
    Secondary(ApiError),
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Password and Confirm Password do not match.")]
    PasswordMismatch,
    #[error("{0}")]
    Api(#[from] ApiError),
}
