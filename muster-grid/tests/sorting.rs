use muster_grid::row::GridRow;
use muster_grid::sort::{SortState, sort_rows};
use muster_grid::value::CellValue;

#[derive(Debug, Clone)]
struct TestRow {
    id: i64,
    name: &'static str,
    score: Option<i64>,
}

impl TestRow {
    fn new(id: i64, name: &'static str, score: Option<i64>) -> Self {
        Self { id, name, score }
    }
}

impl GridRow for TestRow {
    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.into(),
            "score" => self.score.into(),
            _ => CellValue::Null,
        }
    }
}

fn ids(rows: &[TestRow]) -> Vec<i64> {
    rows.iter().map(|row| row.id).collect()
}

#[test]
fn test_toggle_starts_ascending_then_flips() {
    let mut sort = SortState::default();

    assert_eq!(sort.toggle("name"), ("name".to_string(), true));
    assert_eq!(sort.toggle("name"), ("name".to_string(), false));
    assert_eq!(sort.toggle("name"), ("name".to_string(), true));
}

#[test]
fn test_toggle_switching_column_resets_to_ascending() {
    let mut sort = SortState::default();

    sort.toggle("name");
    sort.toggle("name");
    assert!(!sort.ascending);

    assert_eq!(sort.toggle("score"), ("score".to_string(), true));
}

#[test]
fn test_clear_forgets_the_field() {
    let mut sort = SortState::default();
    sort.toggle("name");
    sort.clear();
    assert_eq!(sort.field, None);
}

#[test]
fn test_sort_text_ascending_and_descending() {
    let mut rows = vec![
        TestRow::new(1, "Charlie", None),
        TestRow::new(2, "Alice", None),
        TestRow::new(3, "Bob", None),
    ];

    sort_rows(&mut rows, "name", true);
    assert_eq!(ids(&rows), [2, 3, 1]);

    sort_rows(&mut rows, "name", false);
    assert_eq!(ids(&rows), [1, 3, 2]);
}

#[test]
fn test_sort_numeric_not_lexicographic() {
    let mut rows = vec![
        TestRow::new(1, "a", Some(100)),
        TestRow::new(2, "b", Some(9)),
        TestRow::new(3, "c", Some(25)),
    ];

    sort_rows(&mut rows, "score", true);
    assert_eq!(ids(&rows), [2, 3, 1]);
}

#[test]
fn test_nulls_sort_last_in_both_directions() {
    let mut rows = vec![
        TestRow::new(1, "a", None),
        TestRow::new(2, "b", Some(5)),
        TestRow::new(3, "c", Some(1)),
        TestRow::new(4, "d", None),
    ];

    sort_rows(&mut rows, "score", true);
    assert_eq!(ids(&rows), [3, 2, 1, 4]);

    sort_rows(&mut rows, "score", false);
    assert_eq!(ids(&rows), [2, 3, 1, 4]);
}

#[test]
fn test_equal_keys_keep_incoming_order() {
    let mut rows = vec![
        TestRow::new(1, "same", Some(7)),
        TestRow::new(2, "same", Some(7)),
        TestRow::new(3, "same", Some(7)),
    ];

    sort_rows(&mut rows, "score", false);
    assert_eq!(ids(&rows), [1, 2, 3]);
}

#[test]
fn test_unknown_field_leaves_order_alone() {
    let mut rows = vec![
        TestRow::new(3, "c", None),
        TestRow::new(1, "a", None),
        TestRow::new(2, "b", None),
    ];

    sort_rows(&mut rows, "missing", true);
    assert_eq!(ids(&rows), [3, 1, 2]);
}
