//! Institute records and payloads

use serde::Deserialize;
use serde::Serialize;

use super::FileUpload;

/// A maritime training institute.
#[derive(Debug, Clone, Deserialize)]
pub struct Institute {
    pub id: i64,
    pub institute_name: String,
    #[serde(default)]
    pub institute_email: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields sent when creating or updating an institute.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutePayload {
    pub institute_name: String,
    pub institute_email: String,
    pub mobile_number: String,
    pub location: String,
    pub address: String,
}

/// A bulk email to a set of institutes.
#[derive(Debug, Clone)]
pub struct EmailDispatch {
    /// Target institute ids, usually taken from a grid selection.
    pub institute_ids: Vec<i64>,
    pub subject: String,
    pub description: String,
    /// Spreadsheet attached to the mail, if any.
    pub attachment: Option<FileUpload>,
}
