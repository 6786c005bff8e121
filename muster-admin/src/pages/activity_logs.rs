//! Activity log page.

use muster_api::ApiClient;
use muster_api::api::ActivityLogSource;
use muster_api::model::ActivityLog;
use muster_grid::column::{CellKind, Column};
use muster_grid::grid::DataGrid;
use muster_grid::row::GridRow;
use muster_grid::value::CellValue;
use muster_grid::view::GridView;

use super::to_pagination;
use crate::controller::{ListController, SEARCH_DEBOUNCE_SLOW};
use crate::notify::{Notifier, Toast};

/// Grid adapter over one audit row.
#[derive(Debug, Clone)]
pub struct LogRow(pub ActivityLog);

impl GridRow for LogRow {
    fn id(&self) -> i64 {
        self.0.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "user_name" => self.0.user_name().into(),
            "first_name" => self.0.first_name.clone().into(),
            "last_name" => self.0.last_name.clone().into(),
            "email" => self.0.user_email.clone().into(),
            "action" => self.0.action.clone().into(),
            "details" => self.0.details.clone().into(),
            "created_at" => CellValue::date_or_text(self.0.created_at.clone()),
            "ip_address" => self.0.ip_address.clone().into(),
            _ => CellValue::Null,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::row_number("Sr. No"),
        Column::new("user_name", "User", 20).kind(CellKind::FullName),
        Column::new("action", "Action", 18).kind(CellKind::Badge),
        Column::new("details", "Details", 30),
        Column::new("created_at", "Timestamp", 18).kind(CellKind::DateTime),
        Column::new("ip_address", "IP Address", 15),
    ]
}

/// The read-only audit trail listing.
pub struct ActivityLogsPage {
    controller: ListController<ActivityLog>,
    grid: DataGrid<LogRow>,
    notifier: Notifier,
}

impl ActivityLogsPage {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        let controller = ListController::new(ActivityLogSource::new(client), notifier.clone())
            .with_debounce(SEARCH_DEBOUNCE_SLOW);
        let grid = DataGrid::new(columns());
        Self {
            controller,
            grid,
            notifier,
        }
    }

    /// Initial fetch when the page mounts.
    pub async fn open(&self) {
        self.controller.load().await;
        self.sync();
    }

    /// Push the controller's landed rows and pagination into the grid.
    pub fn sync(&self) {
        let rows: Vec<LogRow> = self.controller.rows().into_iter().map(LogRow).collect();
        let search = self.controller.query().search;
        let empty_text = if search.trim().is_empty() {
            "No activity logs found in the last 3 months."
        } else {
            "No activity logs found matching your search."
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

    pub fn grid(&self) -> &DataGrid<LogRow> {
        &self.grid
    }

    pub fn controller(&self) -> &ListController<ActivityLog> {
        &self.controller
    }

    /// Headers sort the landed page in place; the audit listing never asks
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
        self.notifier.push(Toast::success("Activity logs refreshed"));
        self.sync();
    }
}
