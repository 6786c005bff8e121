use muster_grid::column::{CellKind, Column};
use muster_grid::grid::DataGrid;
use muster_grid::pager::{PageItem, Pagination};
use muster_grid::row::GridRow;
use muster_grid::selection::SelectionMode;
use muster_grid::value::CellValue;
use muster_grid::view::CellContent;

#[derive(Debug, Clone, Default)]
struct PersonRow {
    id: i64,
    first: Option<&'static str>,
    last: Option<&'static str>,
    email: Option<&'static str>,
    role: &'static str,
    joined: Option<&'static str>,
}

impl GridRow for PersonRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "first_name" => CellValue::text_or_null(self.first),
            "last_name" => CellValue::text_or_null(self.last),
            "email" => CellValue::text_or_null(self.email),
            "role" => self.role.into(),
            "joined" => CellValue::text_or_null(self.joined),
            _ => CellValue::Null,
        }
    }
}

fn person(id: i64, first: Option<&'static str>, email: Option<&'static str>) -> PersonRow {
    PersonRow {
        id,
        first,
        last: None,
        email,
        role: "Admin",
        joined: None,
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::row_number("Sr. No"),
        Column::new("first_name", "Full Name", 24).kind(CellKind::FullName),
        Column::new("role", "Role", 12).kind(CellKind::Badge),
        Column::new("joined", "Joined Date", 14).kind(CellKind::Date),
        Column::actions("Actions", &["edit", "delete"]),
    ]
}

fn text(content: &CellContent) -> String {
    match content {
        CellContent::Text(value) | CellContent::Badge(value) => value.clone(),
        CellContent::Stacked(date, time) => format!("{date} {time}"),
        CellContent::Actions(names) => names.join(","),
    }
}

#[test]
fn test_empty_grid_shows_placeholder_and_no_pager() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    let view = grid.view();

    assert!(view.rows.is_empty());
    assert_eq!(view.empty_text.as_deref(), Some("No data available"));
    assert!(view.pager.is_none());
    assert!(!view.selectable);
    assert!(!view.all_selected);
}

#[test]
fn test_empty_text_is_configurable() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_empty_text("No users found");
    assert_eq!(grid.view().empty_text.as_deref(), Some("No users found"));
}

#[test]
fn test_row_numbers_continue_across_pages() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(
        vec![person(21, Some("Ada"), None), person(22, Some("Grace"), None)],
        Pagination {
            current_page: 3,
            per_page: 10,
            total: 35,
            last_page: 4,
        },
    );

    let view = grid.view();
    assert_eq!(text(&view.rows[0].cells[0].content), "21");
    assert_eq!(text(&view.rows[1].cells[0].content), "22");
}

#[test]
fn test_full_name_falls_back_to_email_then_label() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    let mut named = person(1, Some("Ada"), Some("ada@example.com"));
    named.last = Some("Lovelace");
    grid.set_rows(
        vec![
            named,
            person(2, None, Some("grace@example.com")),
            person(3, None, None),
        ],
        Pagination::default(),
    );

    let view = grid.view();
    assert_eq!(text(&view.rows[0].cells[1].content), "Ada Lovelace");
    assert_eq!(text(&view.rows[1].cells[1].content), "grace@example.com");
    assert_eq!(text(&view.rows[2].cells[1].content), "Unknown User");
}

#[test]
fn test_badge_and_actions_cells() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(vec![person(1, Some("Ada"), None)], Pagination::default());

    let view = grid.view();
    assert_eq!(
        view.rows[0].cells[2].content,
        CellContent::Badge("Admin".to_string())
    );
    assert_eq!(
        view.rows[0].cells[4].content,
        CellContent::Actions(vec!["edit".to_string(), "delete".to_string()])
    );
}

#[test]
fn test_date_cell_formats_wire_dates() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    let mut dated = person(1, Some("Ada"), None);
    dated.joined = Some("2024-03-05T10:30:00Z");
    let mut odd = person(2, Some("Grace"), None);
    odd.joined = Some("yesterday");
    grid.set_rows(
        vec![dated, odd, person(3, Some("Joan"), None)],
        Pagination::default(),
    );

    let view = grid.view();
    assert_eq!(text(&view.rows[0].cells[3].content), "05/03/2024");
    // Unparseable text passes through; absent values render as a dash.
    assert_eq!(text(&view.rows[1].cells[3].content), "yesterday");
    assert_eq!(text(&view.rows[2].cells[3].content), "-");
}

#[test]
fn test_date_time_cell_stacks_date_over_time() {
    let columns = vec![Column::new("joined", "Date & Time", 16).kind(CellKind::DateTime)];
    let grid: DataGrid<PersonRow> = DataGrid::new(columns);
    let mut row = person(1, None, None);
    row.joined = Some("2024-03-05 10:30:45");
    grid.set_rows(vec![row], Pagination::default());

    assert_eq!(
        grid.view().rows[0].cells[0].content,
        CellContent::Stacked("05/03/2024".to_string(), "10:30:45".to_string())
    );
}

#[test]
fn test_header_marks_the_sorted_column() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(
        vec![person(2, Some("Grace"), None), person(1, Some("Ada"), None)],
        Pagination::default(),
    );

    grid.toggle_sort("first_name");
    let view = grid.view();
    let header = &view.header[1];
    assert_eq!(header.sorted, Some(true));
    assert!(view.header.iter().filter(|h| h.sorted.is_some()).count() == 1);

    // Client-side sort reordered the rows.
    assert_eq!(text(&view.rows[0].cells[1].content), "Ada");
}

#[test]
fn test_server_sort_records_state_without_reordering() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns()).with_server_sort();
    grid.set_rows(
        vec![person(2, Some("Grace"), None), person(1, Some("Ada"), None)],
        Pagination::default(),
    );

    assert_eq!(
        grid.toggle_sort("first_name"),
        Some(("first_name".to_string(), true))
    );
    let view = grid.view();
    assert_eq!(view.header[1].sorted, Some(true));
    assert_eq!(text(&view.rows[0].cells[1].content), "Grace");
}

#[test]
fn test_unsortable_columns_ignore_header_clicks() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(vec![person(1, Some("Ada"), None)], Pagination::default());

    assert_eq!(grid.toggle_sort("id"), None);
    assert_eq!(grid.toggle_sort("no_such_field"), None);
    assert_eq!(grid.sort().field, None);
}

#[test]
fn test_client_sort_reapplies_to_new_rows() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(
        vec![person(1, Some("Brian"), None), person(2, Some("Ada"), None)],
        Pagination::default(),
    );
    grid.toggle_sort("first_name");

    grid.set_rows(
        vec![person(3, Some("Zed"), None), person(4, Some("Ken"), None)],
        Pagination::default(),
    );
    let view = grid.view();
    assert_eq!(text(&view.rows[0].cells[1].content), "Ken");
}

#[test]
fn test_pager_reflects_pagination_and_jump_state() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(
        vec![person(1, Some("Ada"), None)],
        Pagination {
            current_page: 5,
            per_page: 10,
            total: 95,
            last_page: 10,
        },
    );
    grid.set_jump_input("12");
    grid.confirm_jump();

    let view = grid.view();
    let pager = view.pager.as_ref().unwrap();
    assert_eq!(
        pager.items,
        [
            PageItem::Page(1),
            PageItem::Gap,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Gap,
            PageItem::Page(10),
        ]
    );
    assert_eq!(pager.summary, "Showing 41 to 50 of 95 entries");
    assert_eq!(pager.page_sizes, [10, 20, 50, 100]);
    assert_eq!(pager.jump_input, "12");
    assert_eq!(pager.jump_error.as_deref(), Some("Page number cannot exceed 10"));
}

#[test]
fn test_change_per_page_returns_to_first_page() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(
        vec![person(1, Some("Ada"), None)],
        Pagination {
            current_page: 4,
            per_page: 10,
            total: 95,
            last_page: 10,
        },
    );

    let info = grid.change_per_page(50);
    assert_eq!(info.current_page, 1);
    assert_eq!(info.per_page, 50);
    assert_eq!(info.last_page, 2);
}

#[test]
fn test_selection_state_flows_into_the_view() {
    let grid: DataGrid<PersonRow> =
        DataGrid::new(columns()).with_selection_mode(SelectionMode::Multiple);
    grid.set_rows(
        vec![person(1, Some("Ada"), None), person(2, Some("Grace"), None)],
        Pagination::default(),
    );
    grid.toggle_select(2);

    let view = grid.view();
    assert!(view.selectable);
    assert!(!view.all_selected);
    assert!(!view.rows[0].selected);
    assert!(view.rows[1].selected);

    grid.select_all_on_page();
    assert!(grid.view().all_selected);
}

#[test]
fn test_loading_keeps_rows_visible() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    grid.set_rows(vec![person(1, Some("Ada"), None)], Pagination::default());
    grid.set_loading(true);

    let view = grid.view();
    assert!(view.loading);
    assert_eq!(view.rows.len(), 1);
}

#[test]
fn test_dirty_flag_tracks_mutation() {
    let grid: DataGrid<PersonRow> = DataGrid::new(columns());
    assert!(!grid.is_dirty());

    grid.set_rows(vec![person(1, Some("Ada"), None)], Pagination::default());
    assert!(grid.is_dirty());

    grid.clear_dirty();
    assert!(!grid.is_dirty());

    // Clones share state.
    let twin = grid.clone();
    twin.set_loading(true);
    assert!(grid.is_dirty());
    assert_eq!(grid.id(), twin.id());
}
