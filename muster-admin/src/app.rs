//! Application assembly.
//!
//! [`AdminApp`] owns the shared session, the HTTP client, the permission
//! oracle, and one controller-backed page per entity listing. Pages talk to
//! the backend through the client; everything user-facing funnels through
//! the shared [`Notifier`].

use std::time::Duration;

use log::info;
use muster_api::{ApiClient, SessionContext, SessionUser};
use url::Url;

use crate::error::AdminError;
use crate::menu::{self, MenuEntry};
use crate::notify::{Notifier, Toast};
use crate::pages::{ActivityLogsPage, CadetsPage, InstitutesPage, UsersPage};
use crate::permissions::{PermissionOracle, RouteDecision};
use crate::roles::RoleEditor;

/// Settings the application is assembled from.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend API root, e.g. `https://recruitment.example.com/api`.
    pub base_url: String,
    /// Bearer token for a headless sign-in. Interactive flows sign in
    /// through [`AdminApp::sign_in`] instead.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// The assembled admin application.
pub struct AdminApp {
    session: SessionContext,
    client: ApiClient,
    notifier: Notifier,
    oracle: PermissionOracle,
    pub role_editor: RoleEditor,
    pub institutes: InstitutesPage,
    pub cadets: CadetsPage,
    pub users: UsersPage,
    pub activity_logs: ActivityLogsPage,
}

impl AdminApp {
    /// Assemble the application from its configuration.
    ///
    /// Fails when the base URL does not parse; nothing touches the network
    /// until [`AdminApp::start`].
    pub fn build(config: AppConfig) -> Result<Self, AdminError> {
        Url::parse(&config.base_url)
            .map_err(|e| AdminError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        let session = SessionContext::new();
        if let Some(token) = &config.token {
            session.sign_in_token(token.clone());
        }

        let client = ApiClient::builder()
            .base_url(config.base_url)
            .session(session.clone())
            .timeout(config.timeout)
            .build();

        let notifier = Notifier::default();
        let oracle = PermissionOracle::new(client.clone(), session.clone());
        let role_editor = RoleEditor::new(client.clone(), notifier.clone());

        Ok(Self {
            institutes: InstitutesPage::new(client.clone(), notifier.clone()),
            cadets: CadetsPage::new(client.clone(), notifier.clone()),
            users: UsersPage::new(client.clone(), notifier.clone()),
            activity_logs: ActivityLogsPage::new(client.clone(), notifier.clone()),
            session,
            client,
            notifier,
            oracle,
            role_editor,
        })
    }

    /// Load the session's permission set. Requires a signed-in session.
    pub async fn start(&self) -> Result<(), AdminError> {
        if !self.session.is_signed_in() {
            return Err(AdminError::NoActiveSession);
        }
        self.oracle.load().await;
        info!("Session started against {}", self.client.base_url());
        Ok(())
    }

    /// Sign a user in and load their permission set.
    pub async fn sign_in(&self, user: SessionUser) {
        self.session.sign_in(user);
        self.oracle.load().await;
    }

    /// Sign out, dropping the cached permission set with the session.
    pub fn sign_out(&self) {
        self.session.sign_out();
        self.oracle.clear();
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn oracle(&self) -> &PermissionOracle {
        &self.oracle
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Toasts queued since the last drain, oldest first.
    pub fn take_toasts(&self) -> Vec<Toast> {
        self.notifier.drain()
    }

    /// Menu entries the signed-in user may see.
    pub fn visible_menu(&self) -> Vec<MenuEntry> {
        menu::visible_menu(&self.oracle)
    }

    /// Gate a navigation attempt. Routes without a menu entry are not
    /// permission-gated.
    pub fn route_decision(&self, route: &str) -> RouteDecision {
        match menu::entry_for_route(route) {
            Some(entry) => self.oracle.route_decision(entry.module, entry.action),
            None => RouteDecision::Allow,
        }
    }

    /// Persist the role editor's pending grants, then re-fetch the session's
    /// own permission set so menu gating reflects the edit.
    pub async fn save_selected_role(&self) -> bool {
        if self.role_editor.save().await {
            self.oracle.refresh().await;
            return true;
        }
        false
    }
}
