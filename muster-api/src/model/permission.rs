//! Roles and permission grants

use serde::Deserialize;
use serde::Serialize;

/// A role assignable to admin users.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One `(module, action)` grant in a session's effective permission set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PermissionGrant {
    pub module: String,
    pub action: String,
    pub granted: bool,
}

impl PermissionGrant {
    pub fn new(module: impl Into<String>, action: impl Into<String>, granted: bool) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
            granted,
        }
    }
}

/// A permission row as managed in the role editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub module: String,
    pub action: String,
    pub granted: bool,
}

/// One entry of a bulk permission save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionWrite {
    #[serde(rename = "permissionId")]
    pub permission_id: i64,
    pub granted: bool,
}

impl PermissionWrite {
    pub fn new(permission_id: i64, granted: bool) -> Self {
        Self {
            permission_id,
            granted,
        }
    }
}
