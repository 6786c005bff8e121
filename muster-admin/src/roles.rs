//! Role permission editor.
//!
//! Backs the roles page: pick a role, toggle its permission checkboxes
//! locally, then save the full set in one request. Unsaved toggles are
//! discarded when the selection changes.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::error;
use muster_api::model::{Permission, PermissionWrite, Role};

use crate::notify::{Notifier, Toast};
use crate::permissions::{PermissionBackend, SUPER_ADMIN_ROLE};

/// Where the editor is in its load/edit/save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    /// No role picked yet.
    #[default]
    NoRole,
    /// Fetching the picked role's permissions.
    Loading,
    /// Showing saved state, no local changes.
    Clean,
    /// Local toggles not yet saved.
    Dirty,
    /// Save request in flight.
    Saving,
}

/// One module's permission checkboxes, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleGroup {
    pub module: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Default)]
struct EditorState {
    roles: Vec<Role>,
    selected_role: Option<i64>,
    groups: Vec<ModuleGroup>,
    phase: EditorPhase,
}

/// Editing state for the roles page.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct RoleEditor {
    backend: Arc<dyn PermissionBackend>,
    notifier: Notifier,
    state: Arc<RwLock<EditorState>>,
}

impl RoleEditor {
    pub fn new(backend: impl PermissionBackend + 'static, notifier: Notifier) -> Self {
        Self {
            backend: Arc::new(backend),
            notifier,
            state: Arc::new(RwLock::new(EditorState::default())),
        }
    }

    /// Fetch the editable roles. The super admin role never appears; its
    /// permissions are implicit and not editable.
    pub async fn load_roles(&self) {
        match self.backend.roles().await {
            Ok(roles) => {
                if let Ok(mut state) = self.state.write() {
                    state.roles = roles
                        .into_iter()
                        .filter(|role| role.name != SUPER_ADMIN_ROLE)
                        .collect();
                }
            }
            Err(e) => {
                error!("Failed to load roles: {e}");
                self.notifier.push(Toast::error("Failed to load roles"));
            }
        }
    }

    pub fn roles(&self) -> Vec<Role> {
        self.state
            .read()
            .map(|state| state.roles.clone())
            .unwrap_or_default()
    }

    pub fn selected_role(&self) -> Option<i64> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.selected_role)
    }

    pub fn phase(&self) -> EditorPhase {
        self.state
            .read()
            .map(|state| state.phase)
            .unwrap_or_default()
    }

    /// The picked role's permissions, grouped by module.
    pub fn groups(&self) -> Vec<ModuleGroup> {
        self.state
            .read()
            .map(|state| state.groups.clone())
            .unwrap_or_default()
    }

    pub fn is_dirty(&self) -> bool {
        self.phase() == EditorPhase::Dirty
    }

    /// Pick a role and fetch its permissions, discarding any unsaved
    /// toggles on the previous role.
    pub async fn select_role(&self, role_id: i64) {
        if let Ok(mut state) = self.state.write() {
            state.selected_role = Some(role_id);
            state.groups.clear();
            state.phase = EditorPhase::Loading;
        }

        let result = self.backend.role_permissions(role_id).await;

        if let Ok(mut state) = self.state.write() {
            // The user may have picked another role while this fetch was
            // in flight.
            if state.selected_role != Some(role_id) {
                return;
            }
            match result {
                Ok(grouped) => {
                    state.groups = into_groups(grouped);
                }
                Err(e) => {
                    error!("Failed to load permissions for role {role_id}: {e}");
                    self.notifier
                        .push(Toast::error("Failed to load permissions"));
                }
            }
            state.phase = EditorPhase::Clean;
        }
    }

    /// Drop the selection and any unsaved toggles.
    pub fn clear_selection(&self) {
        if let Ok(mut state) = self.state.write() {
            state.selected_role = None;
            state.groups.clear();
            state.phase = EditorPhase::NoRole;
        }
    }

    /// Flip one checkbox locally.
    pub fn toggle_permission(&self, permission_id: i64) {
        if let Ok(mut state) = self.state.write()
            && let Some(permission) = state
                .groups
                .iter_mut()
                .flat_map(|group| group.permissions.iter_mut())
                .find(|permission| permission.id == permission_id)
        {
            permission.granted = !permission.granted;
            state.phase = EditorPhase::Dirty;
        }
    }

    /// Persist the full permission set for the picked role.
    ///
    /// Returns `true` on success so the caller can refresh the session's
    /// own grants. Failure keeps the local toggles for another attempt.
    pub async fn save(&self) -> bool {
        let Some(role_id) = self.selected_role() else {
            return false;
        };

        let writes: Vec<PermissionWrite> = {
            let Ok(mut state) = self.state.write() else {
                return false;
            };
            state.phase = EditorPhase::Saving;
            state
                .groups
                .iter()
                .flat_map(|group| group.permissions.iter())
                .map(|permission| PermissionWrite::new(permission.id, permission.granted))
                .collect()
        };

        match self.backend.save_role_permissions(role_id, &writes).await {
            Ok(()) => {
                self.notifier
                    .push(Toast::success("All permissions saved successfully!"));
                // Refetch so the editor shows what the backend actually
                // stored.
                self.select_role(role_id).await;
                true
            }
            Err(e) => {
                error!("Failed to save permissions for role {role_id}: {e}");
                self.notifier
                    .push(Toast::error("Failed to save permissions"));
                if let Ok(mut state) = self.state.write()
                    && state.selected_role == Some(role_id)
                {
                    state.phase = EditorPhase::Dirty;
                }
                false
            }
        }
    }
}

fn into_groups(grouped: BTreeMap<String, Vec<Permission>>) -> Vec<ModuleGroup> {
    grouped
        .into_iter()
        .map(|(module, permissions)| ModuleGroup {
            module,
            permissions,
        })
        .collect()
}
