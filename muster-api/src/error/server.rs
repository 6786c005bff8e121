//! Backend error bodies

use serde::Deserialize;

/// Structured error payload the backend attaches to failed requests.
///
/// Endpoints are not consistent about which field carries the message, so
/// both `message` and `error` are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerMessage {
    /// Whether the request succeeded. Always `false` on error bodies.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Alternate field some endpoints use for the message.
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerMessage {
    /// The best available message text.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}
