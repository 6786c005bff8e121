//! Explicit session state
//!
//! Credentials never live in ambient storage. The application creates one
//! [`SessionContext`], hands it to the [`ApiClient`](crate::ApiClient), and
//! drives the sign-in lifecycle through it.

use std::sync::Arc;
use std::sync::RwLock;

use serde::Deserialize;
use serde::Serialize;

/// The signed-in user as issued by the backend at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    /// Role name, e.g. `"SuperAdmin"` or `"Recruiter"`.
    pub role: String,
    /// Bearer token issued for this user.
    #[serde(default)]
    pub token: Option<String>,
}

/// Shared session state.
///
/// Cheap to clone; clones observe the same sign-in state. All reads go
/// through accessors so lock handling stays in one place.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    user: Option<SessionUser>,
    /// Standalone token used when no full user object is available.
    fallback_token: Option<String>,
}

impl SessionContext {
    /// Creates an empty signed-out context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs a user in, replacing any previous user.
    pub fn sign_in(&self, user: SessionUser) {
        if let Ok(mut state) = self.inner.write() {
            state.user = Some(user);
        }
    }

    /// Stores a standalone bearer token without a full user object.
    ///
    /// Used by headless tooling that only holds a token. A signed-in user's
    /// own token always takes precedence over this one.
    pub fn sign_in_token(&self, token: impl Into<String>) {
        if let Ok(mut state) = self.inner.write() {
            state.fallback_token = Some(token.into());
        }
    }

    /// Clears the user and any standalone token.
    pub fn sign_out(&self) {
        if let Ok(mut state) = self.inner.write() {
            state.user = None;
            state.fallback_token = None;
        }
    }

    /// Returns `true` when a user or standalone token is present.
    pub fn is_signed_in(&self) -> bool {
        self.inner
            .read()
            .map(|state| state.user.is_some() || state.fallback_token.is_some())
            .unwrap_or(false)
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.inner
            .read()
            .ok()
            .and_then(|state| state.user.clone())
    }

    /// The signed-in user's role name.
    pub fn role(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|state| state.user.as_ref().map(|user| user.role.clone()))
    }

    /// The bearer token to attach to outbound requests.
    ///
    /// Prefers the signed-in user's token and falls back to the standalone
    /// token when the user carries none.
    pub fn bearer_token(&self) -> Option<String> {
        self.inner.read().ok().and_then(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| user.token.clone())
                .or_else(|| state.fallback_token.clone())
        })
    }
}
