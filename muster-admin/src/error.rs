//! Application error type.

use muster_api::ApiError;
use thiserror::Error;

/// Errors surfaced by the admin application layer.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("no active session")]
    NoActiveSession,

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl AdminError {
    /// The message to show the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }
}
