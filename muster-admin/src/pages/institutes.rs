//! Institutes page.

use log::error;
use muster_api::ApiClient;
use muster_api::api::InstituteSource;
use muster_api::model::{Institute, InstitutePayload};
use muster_grid::column::Column;
use muster_grid::grid::DataGrid;
use muster_grid::row::GridRow;
use muster_grid::selection::SelectionMode;
use muster_grid::value::CellValue;
use muster_grid::view::GridView;

use super::to_pagination;
use crate::controller::ListController;
use crate::modals::{DeleteConfirm, SendEmailForm};
use crate::notify::{Notifier, Toast};

/// Grid adapter over one institute row.
#[derive(Debug, Clone)]
pub struct InstituteRow(pub Institute);

impl GridRow for InstituteRow {
    fn id(&self) -> i64 {
        self.0.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "institute_name" => self.0.institute_name.clone().into(),
            "institute_email" => self.0.institute_email.clone().into(),
            "mobile_number" => self.0.mobile_number.clone().into(),
            "location" => self.0.location.clone().into(),
            "address" => self.0.address.clone().into(),
            "created_at" => CellValue::date_or_text(self.0.created_at.clone()),
            _ => CellValue::Null,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::row_number("Sr. No"),
        Column::new("institute_name", "Institute Name", 28),
        Column::new("institute_email", "Email Address", 28),
        Column::new("mobile_number", "Mobile Number", 16),
        Column::new("location", "Location", 20),
        Column::new("address", "Address", 30),
        Column::actions("Actions", &["edit", "delete"]),
    ]
}

/// The institutes listing with its delete and bulk-email workflows.
pub struct InstitutesPage {
    client: ApiClient,
    controller: ListController<Institute>,
    grid: DataGrid<InstituteRow>,
    notifier: Notifier,
    pub delete_confirm: DeleteConfirm,
    pub email_form: SendEmailForm,
}

impl InstitutesPage {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        let controller =
            ListController::new(InstituteSource::new(client.clone()), notifier.clone());
        let grid = DataGrid::new(columns())
            .with_selection_mode(SelectionMode::Multiple)
            .with_server_sort();
        Self {
            client,
            controller,
            grid,
            notifier,
            delete_confirm: DeleteConfirm::new()
                .with_message("Are you sure you want to delete this institute? This action cannot be undone."),
            email_form: SendEmailForm::new(),
        }
    }

    /// Initial fetch when the page mounts.
    pub async fn open(&self) {
        self.controller.load().await;
        self.sync();
    }

    /// Push the controller's landed rows and pagination into the grid.
    pub fn sync(&self) {
        let rows: Vec<InstituteRow> = self
            .controller
            .rows()
            .into_iter()
            .map(InstituteRow)
            .collect();
        let search = self.controller.query().search;
        let empty_text = if search.trim().is_empty() {
            "Get started by adding a new institute".to_string()
        } else {
            format!("No matches for \"{search}\"")
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

    pub fn grid(&self) -> &DataGrid<InstituteRow> {
        &self.grid
    }

    pub fn controller(&self) -> &ListController<Institute> {
        &self.controller
    }

    pub fn search_term(&self) -> String {
        self.controller.query().search
    }

    // -------------------------------------------------------------------------
    // Grid intents
    // -------------------------------------------------------------------------

    /// A sortable header was clicked.
    pub async fn header_clicked(&self, field: &str) {
        if let Some((field, ascending)) = self.grid.toggle_sort(field) {
            self.controller.sort_changed(field, ascending).await;
            self.sync();
        }
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
        self.controller.refresh_requested().await;
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
    // Create / update
    // -------------------------------------------------------------------------

    /// Save the institute form. Creates when `id` is `None`, updates
    /// otherwise. Returns `true` when the form should close.
    pub async fn save_institute(&self, id: Option<i64>, payload: &InstitutePayload) -> bool {
        let (result, success_message) = match id {
            Some(id) => (
                self.client.update_institute(id, payload).await,
                "Institute updated successfully",
            ),
            None => (
                self.client.create_institute(payload).await,
                "Institute created successfully",
            ),
        };

        match result {
            Ok(()) => {
                self.notifier.push(Toast::success(success_message));
                self.controller.refresh().await;
                self.sync();
                true
            }
            Err(e) => {
                error!("Failed to save institute: {e}");
                let message = e.server_message().unwrap_or("Failed to save institute");
                self.notifier.push(Toast::error(message));
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete
    // -------------------------------------------------------------------------

    pub fn delete_requested(&mut self, id: i64) {
        self.delete_confirm.open(id);
    }

    pub fn delete_cancelled(&mut self) {
        self.delete_confirm.cancel();
    }

    pub async fn delete_confirmed(&mut self) {
        let Some(id) = self.delete_confirm.begin() else {
            return;
        };

        match self.client.delete_institute(id).await {
            Ok(()) => {
                self.notifier
                    .push(Toast::success("Institute deleted successfully"));
                self.controller.refresh().await;
            }
            Err(e) => {
                error!("Failed to delete institute {id}: {e}");
                self.notifier.push(Toast::error("Failed to delete institute"));
            }
        }
        self.delete_confirm.finish();
        self.sync();
    }

    // -------------------------------------------------------------------------
    // Bulk email
    // -------------------------------------------------------------------------

    /// Submit the send-email form against the current grid selection.
    /// Returns `true` when the dialog should close.
    pub async fn send_email_submitted(&mut self) -> bool {
        let selected = self.grid.selected_ids();
        let dispatch = match self.email_form.to_dispatch(&selected) {
            Ok(dispatch) => dispatch,
            Err(message) => {
                self.notifier.push(Toast::error(message));
                return false;
            }
        };

        self.email_form.set_busy(true);
        match self.client.send_institute_email(&dispatch).await {
            Ok(()) => {
                self.notifier.push(Toast::success("Emails sent successfully"));
                self.email_form.reset();
                self.grid.deselect_all();
                true
            }
            Err(e) => {
                error!("Failed to send institute emails: {e}");
                let message = e.server_message().unwrap_or("Failed to send emails");
                self.notifier.push(Toast::error(message));
                self.email_form.set_busy(false);
                false
            }
        }
    }
}
