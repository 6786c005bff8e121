//! API error types

use std::time::Duration;

use super::ServerMessage;

/// Generic fallback shown when the backend gave us nothing usable.
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the backend.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message, taken from the response body when it parsed.
        message: String,
        /// Structured error body, if the backend sent one.
        body: Option<Box<ServerMessage>>,
    },

    /// Network error during the API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse an API response.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body attached.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for authorization failures (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }

    /// The message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// A message fit for showing to the user.
    ///
    /// Prefers the backend-supplied message and falls back to a generic
    /// string for transport and parse failures.
    pub fn user_message(&self) -> String {
        self.server_message()
            .unwrap_or(GENERIC_FAILURE)
            .to_string()
    }
}
