use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use muster_admin::notify::{Notifier, ToastLevel};
use muster_admin::permissions::PermissionBackend;
use muster_admin::roles::{EditorPhase, RoleEditor};
use muster_api::error::ApiError;
use muster_api::model::{Permission, PermissionGrant, PermissionWrite, Role};

fn permission(id: i64, module: &str, action: &str, granted: bool) -> Permission {
    Permission {
        id,
        module: module.to_string(),
        action: action.to_string(),
        granted,
    }
}

/// Canned backend with two roles and a small grouped permission set.
#[derive(Clone, Default)]
struct FakeBackend {
    save_fails: Arc<AtomicBool>,
    saved: Arc<Mutex<Vec<(i64, Vec<PermissionWrite>)>>>,
}

impl FakeBackend {
    fn saved(&self) -> Vec<(i64, Vec<PermissionWrite>)> {
        self.saved.lock().map(|saved| saved.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PermissionBackend for FakeBackend {
    async fn my_permissions(&self) -> Result<Vec<PermissionGrant>, ApiError> {
        Ok(Vec::new())
    }

    async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        Ok(vec![
            Role {
                id: 1,
                name: "SuperAdmin".into(),
                description: None,
            },
            Role {
                id: 2,
                name: "Recruiter".into(),
                description: Some("Handles cadet intake".into()),
            },
            Role {
                id: 3,
                name: "Trainer".into(),
                description: None,
            },
        ])
    }

    async fn role_permissions(
        &self,
        _role_id: i64,
    ) -> Result<BTreeMap<String, Vec<Permission>>, ApiError> {
        let mut grouped = BTreeMap::new();
        grouped.insert(
            "cadets".to_string(),
            vec![
                permission(10, "cadets", "view", true),
                permission(11, "cadets", "import", false),
            ],
        );
        grouped.insert(
            "institutes".to_string(),
            vec![permission(20, "institutes", "view", true)],
        );
        Ok(grouped)
    }

    async fn save_role_permissions(
        &self,
        role_id: i64,
        permissions: &[PermissionWrite],
    ) -> Result<(), ApiError> {
        if self.save_fails.load(Ordering::SeqCst) {
            return Err(ApiError::http(500, "save rejected"));
        }
        if let Ok(mut saved) = self.saved.lock() {
            saved.push((role_id, permissions.to_vec()));
        }
        Ok(())
    }
}

#[tokio::test]
async fn test_load_roles_hides_super_admin() {
    let editor = RoleEditor::new(FakeBackend::default(), Notifier::default());

    editor.load_roles().await;

    let names: Vec<String> = editor.roles().into_iter().map(|role| role.name).collect();
    assert_eq!(names, vec!["Recruiter", "Trainer"]);
}

#[tokio::test]
async fn test_select_role_loads_groups_in_module_order() {
    let editor = RoleEditor::new(FakeBackend::default(), Notifier::default());

    assert_eq!(editor.phase(), EditorPhase::NoRole);
    editor.select_role(2).await;

    assert_eq!(editor.selected_role(), Some(2));
    assert_eq!(editor.phase(), EditorPhase::Clean);
    let groups = editor.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].module, "cadets");
    assert_eq!(groups[1].module, "institutes");
    assert_eq!(groups[0].permissions.len(), 2);
}

#[tokio::test]
async fn test_toggle_marks_dirty() {
    let editor = RoleEditor::new(FakeBackend::default(), Notifier::default());
    editor.select_role(2).await;

    editor.toggle_permission(11);

    assert!(editor.is_dirty());
    let flipped = editor.groups()[0]
        .permissions
        .iter()
        .find(|permission| permission.id == 11)
        .map(|permission| permission.granted);
    assert_eq!(flipped, Some(true));

    // Unknown ids change nothing.
    editor.toggle_permission(999);
    assert!(editor.is_dirty());
}

#[tokio::test]
async fn test_reselecting_discards_unsaved_toggles() {
    let editor = RoleEditor::new(FakeBackend::default(), Notifier::default());
    editor.select_role(2).await;
    editor.toggle_permission(11);
    assert!(editor.is_dirty());

    editor.select_role(3).await;

    assert_eq!(editor.phase(), EditorPhase::Clean);
    let reloaded = editor.groups()[0]
        .permissions
        .iter()
        .find(|permission| permission.id == 11)
        .map(|permission| permission.granted);
    assert_eq!(reloaded, Some(false));
}

#[tokio::test]
async fn test_save_sends_full_set_and_reloads() {
    let backend = FakeBackend::default();
    let notifier = Notifier::default();
    let editor = RoleEditor::new(backend.clone(), notifier.clone());
    editor.select_role(2).await;
    editor.toggle_permission(11);

    assert!(editor.save().await);

    let saved = backend.saved();
    assert_eq!(saved.len(), 1);
    let (role_id, writes) = &saved[0];
    assert_eq!(*role_id, 2);
    // Every checkbox goes up, not only the toggled one.
    assert_eq!(
        *writes,
        vec![
            PermissionWrite::new(10, true),
            PermissionWrite::new(11, true),
            PermissionWrite::new(20, true),
        ]
    );
    assert_eq!(editor.phase(), EditorPhase::Clean);

    let toasts = notifier.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "All permissions saved successfully!");
}

#[tokio::test]
async fn test_failed_save_keeps_toggles_dirty() {
    let backend = FakeBackend::default();
    backend.save_fails.store(true, Ordering::SeqCst);
    let notifier = Notifier::default();
    let editor = RoleEditor::new(backend.clone(), notifier.clone());
    editor.select_role(2).await;
    editor.toggle_permission(11);

    assert!(!editor.save().await);

    assert_eq!(editor.phase(), EditorPhase::Dirty);
    let kept = editor.groups()[0]
        .permissions
        .iter()
        .find(|permission| permission.id == 11)
        .map(|permission| permission.granted);
    assert_eq!(kept, Some(true));
    assert_eq!(notifier.drain()[0].message, "Failed to save permissions");
}

#[tokio::test]
async fn test_save_without_selection_is_inert() {
    let backend = FakeBackend::default();
    let editor = RoleEditor::new(backend.clone(), Notifier::default());

    assert!(!editor.save().await);
    assert!(backend.saved().is_empty());
}

#[tokio::test]
async fn test_clear_selection_resets_phase() {
    let editor = RoleEditor::new(FakeBackend::default(), Notifier::default());
    editor.select_role(2).await;
    editor.toggle_permission(11);

    editor.clear_selection();

    assert_eq!(editor.phase(), EditorPhase::NoRole);
    assert!(editor.groups().is_empty());
    assert_eq!(editor.selected_role(), None);
}
