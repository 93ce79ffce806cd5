//! Error taxonomy for API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single API call.
///
/// `Unauthorized` is special: by the time the caller sees it, the request
/// pipeline has already cleared the persisted session and signalled the
/// routing layer. Every other variant is propagated unchanged; the caller
/// decides whether to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("session expired or credentials not accepted")]
    Unauthorized,

    /// Non-401 HTTP failure (403, 404, 400, 5xx, ...). `message` carries the
    /// server's envelope message when the body had one.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// HTTP 2xx whose envelope came back with `success: false`.
    #[error("request rejected by server")]
    Rejected { message: Option<String> },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx, non-401 HTTP status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        debug_assert!(status != 401, "401 is handled by the request pipeline");
        Self::Status { status, message }
    }

    /// Message supplied by the server payload, if any. Used for the login
    /// error banner; synthetic descriptions are deliberately excluded so
    /// callers can fall back to their own generic wording.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }
}
