//! Cadet management page.

use log::error;
use muster_api::ApiClient;
use muster_api::api::CadetSource;
use muster_api::api::query::ListQuery;
use muster_api::model::{Cadet, Institute};
use muster_grid::column::{CellKind, Column};
use muster_grid::grid::DataGrid;
use muster_grid::row::GridRow;
use muster_grid::selection::SelectionMode;
use muster_grid::value::CellValue;
use muster_grid::view::GridView;

use super::to_pagination;
use crate::controller::ListController;
use crate::modals::CadetImportForm;
use crate::notify::{Notifier, Toast};

/// Page size for the institute filter dropdown, large enough to hold every
/// institute in one fetch.
const INSTITUTE_OPTIONS_LIMIT: u32 = 100;

/// Grid adapter over one cadet row.
#[derive(Debug, Clone)]
pub struct CadetRow(pub Cadet);

impl GridRow for CadetRow {
    fn id(&self) -> i64 {
        self.0.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "institute_name" => self.0.institute_name.clone().into(),
            "name" => self.0.name.clone().into(),
            "email" => self.0.email.clone().into(),
            "phone" => self.0.phone.clone().into(),
            "gender" => self.0.gender.clone().into(),
            "dob" => CellValue::date_or_text(self.0.dob.clone()),
            "course" => self.0.course.clone().into(),
            "batch" => self.0.batch.clone().into(),
            "indos_number" => self.0.indos_number.clone().into(),
            "tenth_percentage" => self.0.tenth_percentage.into(),
            "twelfth_percentage" => self.0.twelfth_percentage.into(),
            "pcm_percentage" => self.0.pcm_percentage.into(),
            "hometown" => self.0.hometown.clone().into(),
            "passing_out_date" => CellValue::date_or_text(self.0.passing_out_date.clone()),
            "age_at_passing_out" => self.0.age_at_passing_out.into(),
            "batch_rank" => self.0.batch_rank.into(),
            "no_of_arrears" => self.0.no_of_arrears.into(),
            "imu_rank" => self.0.imu_rank.into(),
            "imu_avg_percentage" => self.0.imu_avg_percentage.into(),
            "bmi" => self.0.bmi.into(),
            "extra_curricular" => self.0.extra_curricular.clone().into(),
            "current_stage" => CellValue::text_or_null(self.0.stage_label()),
            _ => CellValue::Null,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::row_number("S.No"),
        Column::new("institute_name", "Institute", 18),
        Column::new("name", "Name", 18),
        Column::new("email", "Email", 20),
        Column::new("phone", "Contact", 13),
        Column::new("gender", "Gender", 8),
        Column::new("dob", "DOB", 10).kind(CellKind::Date),
        Column::new("course", "Course", 12),
        Column::new("batch", "Batch", 12),
        Column::new("indos_number", "INDoS", 10),
        Column::new("tenth_percentage", "10th %", 8),
        Column::new("twelfth_percentage", "12th %", 8),
        Column::new("pcm_percentage", "PCM %", 8),
        Column::new("hometown", "Hometown", 15),
        Column::new("passing_out_date", "Passing Out", 12).kind(CellKind::Date),
        Column::new("age_at_passing_out", "Age", 8),
        Column::new("batch_rank", "Rank", 8),
        Column::new("no_of_arrears", "Arrears", 8),
        Column::new("imu_rank", "IMU Rank", 10),
        Column::new("imu_avg_percentage", "IMU Avg %", 10),
        Column::new("bmi", "BMI", 8),
        Column::new("extra_curricular", "Activities", 20),
        Column::new("current_stage", "Current Stage", 16).kind(CellKind::Badge),
        Column::actions("Actions", &["view"]),
    ]
}

/// The cadet listing with its institute filter and spreadsheet import.
pub struct CadetsPage {
    client: ApiClient,
    controller: ListController<Cadet>,
    grid: DataGrid<CadetRow>,
    notifier: Notifier,
    institutes: Vec<Institute>,
    institute_filter: Option<i64>,
    pub import_form: CadetImportForm,
}

impl CadetsPage {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        let controller = ListController::new(CadetSource::new(client.clone()), notifier.clone());
        let grid = DataGrid::new(columns()).with_selection_mode(SelectionMode::Multiple);
        grid.set_empty_text("No cadets found");
        Self {
            client,
            controller,
            grid,
            notifier,
            institutes: Vec::new(),
            institute_filter: None,
            import_form: CadetImportForm::new(),
        }
    }

    /// Initial fetch when the page mounts: the institute options for the
    /// filter dropdown, then the first cadet page.
    pub async fn open(&mut self) {
        self.load_institutes().await;
        self.controller.load().await;
        self.sync();
    }

    async fn load_institutes(&mut self) {
        let query = ListQuery::new().limit(INSTITUTE_OPTIONS_LIMIT);
        match self.client.list_institutes(&query).await {
            Ok(page) => self.institutes = page.items,
            Err(e) => error!("Error fetching institutes: {e}"),
        }
    }

    /// Push the controller's landed rows and pagination into the grid.
    pub fn sync(&self) {
        let rows: Vec<CadetRow> = self.controller.rows().into_iter().map(CadetRow).collect();
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

    pub fn grid(&self) -> &DataGrid<CadetRow> {
        &self.grid
    }

    pub fn controller(&self) -> &ListController<Cadet> {
        &self.controller
    }

    /// Institutes for the filter dropdown and the import form.
    pub fn institute_options(&self) -> &[Institute] {
        &self.institutes
    }

    pub fn institute_filter(&self) -> Option<i64> {
        self.institute_filter
    }

    // -------------------------------------------------------------------------
    // Grid intents
    // -------------------------------------------------------------------------

    /// Headers sort the landed page in place; the cadet listing never asks
    /// the backend to reorder.
    pub fn header_clicked(&self, field: &str) {
        self.grid.toggle_sort(field);
    }

    /// The institute filter changed. `None` shows every institute's cadets.
    pub async fn filter_changed(&mut self, institute_id: Option<i64>) {
        self.institute_filter = institute_id;
        self.controller
            .set_filter("instituteId", institute_id.map(|id| id.to_string()))
            .await;
        self.sync();
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
    // Spreadsheet import
    // -------------------------------------------------------------------------

    /// Submit the import form. Returns `true` when the dialog should close.
    pub async fn import_submitted(&mut self) -> bool {
        let (file, import) = match self.import_form.to_import() {
            Ok(pair) => pair,
            Err(message) => {
                self.notifier.push(Toast::error(message));
                return false;
            }
        };

        self.import_form.set_busy(true);
        match self.client.import_cadets(&file, &import).await {
            Ok(outcome) => {
                self.notifier.push(Toast::success(format!(
                    "Successfully imported {} cadets!",
                    outcome.imported
                )));
                self.import_form.reset();
                self.controller.set_page(1).await;
                self.sync();
                true
            }
            Err(e) => {
                error!("Cadet import failed: {e}");
                let message = e.server_message().unwrap_or("Error importing cadets");
                self.notifier.push(Toast::error(message));
                self.import_form.set_busy(false);
                false
            }
        }
    }
}
