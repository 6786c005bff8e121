//! Render snapshots.
//!
//! [`DataGrid::view`] flattens grid state into plain serializable structs
//! so a front end can paint a listing without touching grid internals or
//! holding its lock.

use serde::Serialize;

use crate::column::{Alignment, CellKind, Column};
use crate::grid::DataGrid;
use crate::pager::{PAGE_SIZE_OPTIONS, PageItem, Pagination, page_numbers};
use crate::row::GridRow;
use crate::selection::SelectionMode;
use crate::value::{CellValue, parse_wire_date};

const UNKNOWN_NAME: &str = "Unknown User";

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub field: String,
    pub header: String,
    pub width: u16,
    pub align: Alignment,
    pub sortable: bool,
    /// `Some(ascending)` when this column holds the active sort.
    pub sorted: Option<bool>,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub align: Alignment,
    pub content: CellContent,
}

/// What a cell paints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellContent {
    Text(String),
    /// A labeled tag (roles, audit actions).
    Badge(String),
    /// Two stacked lines, date over time.
    Stacked(String, String),
    /// Action buttons, by name.
    Actions(Vec<String>),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: i64,
    pub selected: bool,
    pub cells: Vec<CellView>,
}

/// The rendered pager footer. Absent while the grid has no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagerView {
    /// Windowed page strip, gaps included.
    pub items: Vec<PageItem>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    /// Page sizes offered in the per-page picker.
    pub page_sizes: Vec<u32>,
    /// The "Showing X to Y of Z entries" line.
    pub summary: String,
    pub jump_input: String,
    pub jump_error: Option<String>,
}

/// A full render snapshot of a grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridView {
    pub header: Vec<HeaderView>,
    /// Whether rows carry selection checkboxes.
    pub selectable: bool,
    /// Whether every row on this page is selected.
    pub all_selected: bool,
    pub rows: Vec<RowView>,
    /// The placeholder message, present only when there are no rows.
    pub empty_text: Option<String>,
    pub loading: bool,
    pub pager: Option<PagerView>,
}

impl<R: GridRow> DataGrid<R> {
    /// Take a render snapshot of the grid.
    pub fn view(&self) -> GridView {
        let Ok(grid) = self.inner.read() else {
            return GridView::default();
        };

        let header = grid
            .columns
            .iter()
            .map(|column| HeaderView {
                field: column.field.clone(),
                header: column.header.clone(),
                width: column.width,
                align: column.align,
                sortable: column.sortable,
                sorted: (grid.sort.field.as_deref() == Some(column.field.as_str()))
                    .then_some(grid.sort.ascending),
            })
            .collect();

        let rows: Vec<RowView> = grid
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                id: row.id(),
                selected: grid.selection.is_selected(row.id()),
                cells: grid
                    .columns
                    .iter()
                    .map(|column| CellView {
                        align: column.align,
                        content: cell_content(column, row, index, grid.pagination),
                    })
                    .collect(),
            })
            .collect();

        let page_ids: Vec<i64> = grid.rows.iter().map(|row| row.id()).collect();
        let pager = (!rows.is_empty()).then(|| PagerView {
            items: page_numbers(grid.pagination.current_page, grid.pagination.last_page),
            current_page: grid.pagination.current_page,
            last_page: grid.pagination.last_page,
            per_page: grid.pagination.per_page,
            page_sizes: PAGE_SIZE_OPTIONS.to_vec(),
            summary: grid.pagination.summary(),
            jump_input: grid.jump.input().to_string(),
            jump_error: grid.jump.error().map(str::to_string),
        });

        GridView {
            header,
            selectable: grid.selection_mode != SelectionMode::None,
            all_selected: grid.selection.page_fully_selected(&page_ids),
            empty_text: rows.is_empty().then(|| grid.empty_text.clone()),
            rows,
            loading: grid.loading,
            pager,
        }
    }
}

fn cell_content<R: GridRow>(
    column: &Column,
    row: &R,
    index: usize,
    pagination: Pagination,
) -> CellContent {
    match &column.kind {
        CellKind::Text => CellContent::Text(row.value(&column.field).display()),
        CellKind::Badge => CellContent::Badge(row.value(&column.field).display()),
        CellKind::Date => {
            let text = match row.value(&column.field) {
                CellValue::Text(raw) => match parse_wire_date(&raw) {
                    Some(parsed) => parsed.format("%d/%m/%Y").to_string(),
                    None => raw,
                },
                value => value.display(),
            };
            CellContent::Text(text)
        }
        CellKind::DateTime => match row.value(&column.field) {
            CellValue::Date(parsed) => stacked_timestamp(parsed),
            CellValue::Text(raw) => match parse_wire_date(&raw) {
                Some(parsed) => stacked_timestamp(parsed),
                None => CellContent::Text(raw),
            },
            value => CellContent::Text(value.display()),
        },
        CellKind::RowNumber => {
            let offset = u64::from(pagination.current_page.saturating_sub(1))
                * u64::from(pagination.per_page);
            CellContent::Text((offset + index as u64 + 1).to_string())
        }
        CellKind::FullName => CellContent::Text(full_name(row)),
        CellKind::Actions(names) => CellContent::Actions(names.clone()),
    }
}

fn stacked_timestamp(parsed: chrono::DateTime<chrono::Utc>) -> CellContent {
    CellContent::Stacked(
        parsed.format("%d/%m/%Y").to_string(),
        parsed.format("%H:%M:%S").to_string(),
    )
}

/// "First Last", falling back to the email and then to a fixed label.
fn full_name<R: GridRow>(row: &R) -> String {
    let mut parts = Vec::new();
    for key in ["first_name", "last_name"] {
        if let CellValue::Text(text) = row.value(key) {
            let text = text.trim();
            if !text.is_empty() {
                parts.push(text.to_string());
            }
        }
    }
    if !parts.is_empty() {
        return parts.join(" ");
    }
    if let CellValue::Text(email) = row.value("email") {
        let email = email.trim();
        if !email.is_empty() {
            return email.to_string();
        }
    }
    UNKNOWN_NAME.to_string()
}
