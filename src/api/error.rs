use crate::models::SchemaError;
use thiserror::Error;

/// Outcome of a failed fetch. Every variant is shown to the user with a
/// retry control; none of them end the process.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response: {0}")]
    Schema(#[from] SchemaError),
}

impl FetchError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            err.to_string()
        };
        FetchError::Network { message }
    }

    /// HTTP status for `Http` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
