//! Error types for the estimator client
//!
//! Every failure a user action can hit is represented here. The controller
//! decides how each one surfaces (blocking alert or inline chat message).

use thiserror::Error;

/// Client-level error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required form field was left blank
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request never produced a response (connection refused, reset, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, if readable
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The backend reported an error in its payload
    #[error("{0}")]
    Backend(String),
}

/// Convenience alias used throughout the client
pub type ClientResult<T> = Result<T, ClientError>;
