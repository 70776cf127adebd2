//! Error taxonomy for backend calls.

use thiserror::Error;

/// Fallback shown when the server gave us nothing displayable.
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, aborted fetch).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Server {
        status: u16,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },
}

impl ApiError {
    /// A message fit to show the user: the server-provided one when present,
    /// otherwise a generic fallback.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => GENERIC_MESSAGE.to_string(),
        }
    }

    /// Whether the failure means the credential itself was rejected.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Server { status: 401 | 403, .. })
    }
}
