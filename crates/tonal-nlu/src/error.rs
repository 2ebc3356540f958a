//! NLU client error types.

use thiserror::Error;

/// Failures reaching or interpreting the external NLU service.
#[derive(Error, Debug)]
pub enum NluError {
    #[error("request to NLU service failed: {0}")]
    Request(reqwest::Error),

    #[error("NLU service call timed out")]
    Timeout,

    #[error("NLU service rejected the call ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("unexpected NLU response shape: {0}")]
    Decode(String),

    #[error("NLU response missing {0}")]
    MissingField(&'static str),
}

/// Result type for NLU operations.
pub type NluResult<T> = Result<T, NluError>;

impl NluError {
    /// Classify a transport-level reqwest failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }

    /// Whether the external call exceeded its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
