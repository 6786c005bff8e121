//! User management page.

use log::error;
use muster_api::ApiClient;
use muster_api::api::UserSource;
use muster_api::model::User;
use muster_grid::column::{CellKind, Column};
use muster_grid::grid::DataGrid;
use muster_grid::row::GridRow;
use muster_grid::selection::SelectionMode;
use muster_grid::value::CellValue;
use muster_grid::view::GridView;

use super::to_pagination;
use crate::AdminError;
use crate::controller::{ListController, SEARCH_DEBOUNCE_SLOW};
use crate::modals::{DeleteConfirm, UserForm};
use crate::notify::{Notifier, Toast};

/// Grid adapter over one user row.
#[derive(Debug, Clone)]
pub struct UserRow(pub User);

impl GridRow for UserRow {
    fn id(&self) -> i64 {
        self.0.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "first_name" => self.0.first_name.clone().into(),
            "last_name" => self.0.last_name.clone().into(),
            "email" => self.0.email.clone().into(),
            "role" => self.0.role.clone().into(),
            "created_at" => CellValue::date_or_text(self.0.created_at.clone()),
            _ => CellValue::Null,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::row_number("Sr. No"),
        Column::new("first_name", "Full Name", 20).kind(CellKind::FullName),
        Column::new("email", "Email Address", 25),
        Column::new("role", "Role", 15).kind(CellKind::Badge),
        Column::new("created_at", "Joined Date", 15).kind(CellKind::Date),
        Column::actions("Actions", &["edit", "delete"]),
    ]
}

/// The admin user listing with its create, edit, and delete workflows.
pub struct UsersPage {
    client: ApiClient,
    controller: ListController<User>,
    grid: DataGrid<UserRow>,
    notifier: Notifier,
    pub delete_confirm: DeleteConfirm,
    /// The open create/edit form, when one is showing.
    pub form: Option<UserForm>,
}

impl UsersPage {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        let controller = ListController::new(UserSource::new(client.clone()), notifier.clone())
            .with_debounce(SEARCH_DEBOUNCE_SLOW);
        let grid = DataGrid::new(columns()).with_selection_mode(SelectionMode::Multiple);
        Self {
            client,
            controller,
            grid,
            notifier,
            delete_confirm: DeleteConfirm::new().with_title("Delete User"),
            form: None,
        }
    }

    /// Initial fetch when the page mounts.
    pub async fn open(&self) {
        self.controller.load().await;
        self.sync();
    }

    /// Push the controller's landed rows and pagination into the grid.
    pub fn sync(&self) {
        let rows: Vec<UserRow> = self.controller.rows().into_iter().map(UserRow).collect();
        let search = self.controller.query().search;
        let empty_text = if search.trim().is_empty() {
            "No users available".to_string()
        } else {
            format!("No users found matching \"{search}\"")
        };
        self.grid.set_empty_text(empty_text);
        self.grid
            .set_rows(rows, to_pagination(self.controller.page_info()));
        self.grid.set_loading(self.controller.is_loading());
    }

    /// Sync if a background fetch changed controller state. Returns `true`
    /// when something was synced.
    pub fn poll(&self) -> bool {
        if self.controller.take_dirty() {
            self.sync();
            return true;
        }
        false
    }

    pub fn view(&self) -> GridView {
        self.grid.view()
    }

    pub fn grid(&self) -> &DataGrid<UserRow> {
        &self.grid
    }

    pub fn controller(&self) -> &ListController<User> {
        &self.controller
    }

    // -------------------------------------------------------------------------
    // Grid intents
    // -------------------------------------------------------------------------

    /// Headers sort the landed page in place; the users listing never asks
    /// the backend to reorder.
    pub fn header_clicked(&self, field: &str) {
        self.grid.toggle_sort(field);
    }

    /// Search input changed; the fetch debounces.
    pub fn search_input(&self, text: impl Into<String>) {
        self.controller.search_changed(text);
    }

    pub async fn page_selected(&self, page: u32) {
        self.controller.set_page(page).await;
        self.sync();
    }

    pub async fn per_page_selected(&self, per_page: u32) {
        self.controller.set_per_page(per_page).await;
        self.sync();
    }

    pub fn jump_input(&self, text: impl Into<String>) {
        self.grid.set_jump_input(text);
    }

    pub async fn jump_confirmed(&self) {
        if let Some(page) = self.grid.confirm_jump() {
            self.controller.set_page(page).await;
            self.sync();
        }
    }

    pub async fn refresh_clicked(&self) {
        self.controller.refresh().await;
        self.sync();
    }

    pub fn row_toggled(&self, id: i64) {
        self.grid.toggle_select(id);
    }

    pub fn select_all_toggled(&self) {
        if self.grid.all_on_page_selected() {
            self.grid.deselect_all();
        } else {
            self.grid.select_all_on_page();
        }
    }

    // -------------------------------------------------------------------------
    // Create / edit
    // -------------------------------------------------------------------------

    pub fn add_clicked(&mut self) {
        self.form = Some(UserForm::create());
    }

    /// Open the edit form pre-filled from a listed user.
    pub fn edit_requested(&mut self, id: i64) -> Result<(), AdminError> {
        let row = self
            .grid
            .rows()
            .into_iter()
            .find(|row| row.0.id == id)
            .ok_or(AdminError::NotFound { entity: "user", id })?;
        self.form = Some(UserForm::edit(&row.0));
        Ok(())
    }

    pub fn form_cancelled(&mut self) {
        if let Some(form) = &self.form
            && !form.is_busy()
        {
            self.form = None;
        }
    }

    /// Submit the open form. Returns `true` when the dialog closed.
    pub async fn form_submitted(&mut self) -> bool {
        let Some(form) = &mut self.form else {
            return false;
        };
        if form.is_busy() {
            return false;
        }

        let (result, success_message, failure_message) = match form.user_id() {
            Some(id) => {
                let update = match form.to_update() {
                    Ok(update) => update,
                    Err(message) => {
                        self.notifier.push(Toast::error(message));
                        return false;
                    }
                };
                form.set_busy(true);
                (
                    self.client.update_user(id, &update).await,
                    "User updated successfully",
                    "Failed to update user",
                )
            }
            None => {
                let new_user = match form.to_new_user() {
                    Ok(new_user) => new_user,
                    Err(message) => {
                        self.notifier.push(Toast::error(message));
                        return false;
                    }
                };
                form.set_busy(true);
                (
                    self.client.create_user(&new_user).await,
                    "User created successfully",
                    "Failed to create user",
                )
            }
        };

        match result {
            Ok(()) => {
                self.notifier.push(Toast::success(success_message));
                self.form = None;
                self.controller.refresh().await;
                self.sync();
                true
            }
            Err(e) => {
                error!("User form submit failed: {e}");
                let message = e.server_message().unwrap_or(failure_message);
                self.notifier.push(Toast::error(message));
                if let Some(form) = &mut self.form {
                    form.set_busy(false);
                }
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    /// Open the delete confirmation, naming the user in the message.
    pub fn delete_requested(&mut self, id: i64) {
        let name = self
            .grid
            .rows()
            .into_iter()
            .find(|row| row.0.id == id)
            .map(|row| row.0.display_name())
            .unwrap_or_else(|| "this user".to_string());
        self.delete_confirm.set_message(format!(
            "Are you sure you want to delete {name}? This action cannot be undone."
        ));
        self.delete_confirm.open(id);
    }

    pub fn delete_cancelled(&mut self) {
        self.delete_confirm.cancel();
    }

    pub async fn delete_confirmed(&mut self) {
        let Some(id) = self.delete_confirm.begin() else {
            return;
        };

        match self.client.delete_user(id).await {
            Ok(()) => {
                self.notifier.push(Toast::success("User deleted successfully"));
                self.controller.refresh().await;
            }
            Err(e) => {
                error!("Failed to delete user {id}: {e}");
                let message = e.server_message().unwrap_or("Failed to delete user");
                self.notifier.push(Toast::error(message));
            }
        }
        self.delete_confirm.finish();
        self.sync();
    }
}
