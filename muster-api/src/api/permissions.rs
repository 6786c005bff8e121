//! Role and permission operations

use std::collections::BTreeMap;

use serde_json::json;

use super::page::MaybeWrapped;
use crate::ApiClient;
use crate::error::ApiError;
use crate::model::Permission;
use crate::model::PermissionGrant;
use crate::model::PermissionWrite;
use crate::model::Role;

impl ApiClient {
    /// Fetches the signed-in session's effective permission grants.
    ///
    /// Fetched once after sign-in and again after a role's permissions are
    /// edited; capability checks between fetches run against the cached set.
    pub async fn my_permissions(&self) -> Result<Vec<PermissionGrant>, ApiError> {
        let grants: MaybeWrapped<Vec<PermissionGrant>> = self
            .get_json("/role-permissions/me/permissions", &[])
            .await?;
        Ok(grants.into_inner())
    }

    /// Lists every role known to the backend.
    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        let roles: MaybeWrapped<Vec<Role>> =
            self.get_json("/role-permissions/roles", &[]).await?;
        Ok(roles.into_inner())
    }

    /// Fetches one role's permission matrix, grouped by module.
    pub async fn role_permissions(
        &self,
        role_id: i64,
    ) -> Result<BTreeMap<String, Vec<Permission>>, ApiError> {
        let grouped: MaybeWrapped<BTreeMap<String, Vec<Permission>>> = self
            .get_json(&format!("/role-permissions/roles/{role_id}/permissions"), &[])
            .await?;
        Ok(grouped.into_inner())
    }

    /// Replaces a role's full permission set in one request.
    ///
    /// The backend treats this as the complete new truth for the role, so
    /// callers must send every permission, not just the changed ones.
    pub async fn save_role_permissions(
        &self,
        role_id: i64,
        permissions: &[PermissionWrite],
    ) -> Result<(), ApiError> {
        let body = json!({ "permissions": permissions });
        self.put_json(
            &format!("/role-permissions/roles/{role_id}/permissions"),
            &body,
        )
        .await
    }
}
