//! Activity log records

use serde::Deserialize;

/// Shown when a log entry has no usable user attribution.
pub const UNKNOWN_USER: &str = "Unknown User";

/// One audit trail entry.
///
/// The backend joins the acting user's name and email onto the row; all
/// three come back empty for deleted accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ActivityLog {
    /// Display name for the attributed user.
    ///
    /// Joins first and last name when either is present, then falls back to
    /// the email, then to [`UNKNOWN_USER`].
    pub fn user_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return name;
        }

        match self.user_email.as_deref() {
            Some(email) if !email.trim().is_empty() => email.to_string(),
            _ => UNKNOWN_USER.to_string(),
        }
    }
}
