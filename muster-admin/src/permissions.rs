//! Role and permission gating.
//!
//! Permissions are fetched once per session and answered from memory. A
//! check distinguishes "not loaded yet" from "denied" so navigation can
//! wait for the fetch instead of bouncing the user to the fallback route.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::{debug, error};
use muster_api::model::{Permission, PermissionGrant, PermissionWrite, Role};
use muster_api::{ApiClient, ApiError, SessionContext};

/// Role that bypasses permission checks entirely.
pub const SUPER_ADMIN_ROLE: &str = "SuperAdmin";

/// Tri-state answer to "may this role do that".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Permissions have not finished loading.
    Unknown,
    Granted,
    Denied,
}

/// What navigation should do with a gated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hold the navigation until permissions finish loading.
    Wait,
    Allow,
    /// Send the user to the fallback route.
    Redirect,
}

/// Backend trait for permission data.
///
/// Implemented by [`ApiClient`]; tests substitute their own.
#[async_trait]
pub trait PermissionBackend: Send + Sync {
    /// The signed-in user's own permission grants.
    async fn my_permissions(&self) -> Result<Vec<PermissionGrant>, ApiError>;

    /// All editable roles.
    async fn roles(&self) -> Result<Vec<Role>, ApiError>;

    /// One role's permissions, grouped by module.
    async fn role_permissions(
        &self,
        role_id: i64,
    ) -> Result<BTreeMap<String, Vec<Permission>>, ApiError>;

    /// Persist permission changes for one role.
    async fn save_role_permissions(
        &self,
        role_id: i64,
        permissions: &[PermissionWrite],
    ) -> Result<(), ApiError>;
}

#[async_trait]
impl PermissionBackend for ApiClient {
    async fn my_permissions(&self) -> Result<Vec<PermissionGrant>, ApiError> {
        self.my_permissions().await
    }

    async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        self.roles().await
    }

    async fn role_permissions(
        &self,
        role_id: i64,
    ) -> Result<BTreeMap<String, Vec<Permission>>, ApiError> {
        self.role_permissions(role_id).await
    }

    async fn save_role_permissions(
        &self,
        role_id: i64,
        permissions: &[PermissionWrite],
    ) -> Result<(), ApiError> {
        self.save_role_permissions(role_id, permissions).await
    }
}

#[derive(Debug, Default)]
struct OracleState {
    grants: Vec<PermissionGrant>,
    loaded: bool,
}

/// Session-scoped permission cache.
#[derive(Clone)]
pub struct PermissionOracle {
    backend: Arc<dyn PermissionBackend>,
    session: SessionContext,
    state: Arc<RwLock<OracleState>>,
}

impl PermissionOracle {
    pub fn new(backend: impl PermissionBackend + 'static, session: SessionContext) -> Self {
        Self {
            backend: Arc::new(backend),
            session,
            state: Arc::new(RwLock::new(OracleState::default())),
        }
    }

    /// Fetch the session's grants.
    ///
    /// The super admin role skips the fetch; it passes every check anyway.
    /// A failed fetch still marks the oracle loaded, with no grants, so
    /// gated routes deny instead of waiting forever.
    pub async fn load(&self) {
        if self.session.role().as_deref() == Some(SUPER_ADMIN_ROLE) {
            debug!("Skipping permission fetch for super admin");
            if let Ok(mut state) = self.state.write() {
                state.grants.clear();
                state.loaded = true;
            }
            return;
        }

        let grants = match self.backend.my_permissions().await {
            Ok(grants) => grants,
            Err(e) => {
                error!("Failed to load permissions: {e}");
                Vec::new()
            }
        };
        debug!("Loaded {} permission grants", grants.len());
        if let Ok(mut state) = self.state.write() {
            state.grants = grants;
            state.loaded = true;
        }
    }

    /// Refetch grants, keeping the old ones answering until the fetch lands.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Drop all cached grants on sign-out.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.write() {
            state.grants.clear();
            state.loaded = false;
        }
    }

    /// `true` once grants have been fetched for this session.
    pub fn is_loaded(&self) -> bool {
        self.state.read().map(|state| state.loaded).unwrap_or(false)
    }

    /// Answer whether the session's role may perform `action` on `module`.
    pub fn check(&self, module: &str, action: &str) -> Capability {
        if self.session.role().as_deref() == Some(SUPER_ADMIN_ROLE) {
            return Capability::Granted;
        }

        let Ok(state) = self.state.read() else {
            return Capability::Unknown;
        };
        if !state.loaded {
            return Capability::Unknown;
        }

        let granted = state
            .grants
            .iter()
            .any(|grant| grant.module == module && grant.action == action && grant.granted);
        if granted {
            Capability::Granted
        } else {
            Capability::Denied
        }
    }

    /// Boolean form of [`PermissionOracle::check`] for menu filtering,
    /// where a pending load just hides the entry until it resolves.
    pub fn has_permission(&self, module: &str, action: &str) -> bool {
        self.check(module, action) == Capability::Granted
    }

    /// Gate a navigation attempt.
    pub fn route_decision(&self, module: &str, action: &str) -> RouteDecision {
        match self.check(module, action) {
            Capability::Unknown => RouteDecision::Wait,
            Capability::Granted => RouteDecision::Allow,
            Capability::Denied => RouteDecision::Redirect,
        }
    }
}
