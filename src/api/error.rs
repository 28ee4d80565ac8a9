//! API Error Types
//!
//! Failures the roster client can hit while talking to the activities API.

use thiserror::Error;

/// Errors returned by [`RosterApi`](super::RosterApi) implementations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Server-provided `detail` text, when it was a plain string
        detail: Option<String>,
    },

    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether the failure came from the transport or body decoding rather
    /// than from a structured server rejection.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Parse(_))
    }
}
