//! Sort state and the client-side comparator

use std::cmp::Ordering;

use crate::row::GridRow;
use crate::value::CellValue;

/// Current sort: field key plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// Sorted field key. `None` keeps the data's incoming order.
    pub field: Option<String>,
    /// `true` for ascending.
    pub ascending: bool,
}

impl SortState {
    /// Applies a header click: the same column flips direction, a new
    /// column starts ascending. Returns the resulting state.
    pub fn toggle(&mut self, field: &str) -> (String, bool) {
        match &self.field {
            Some(current) if current == field => self.ascending = !self.ascending,
            _ => {
                self.field = Some(field.to_string());
                self.ascending = true;
            }
        }
        (field.to_string(), self.ascending)
    }

    /// Clears back to the incoming order.
    pub fn clear(&mut self) {
        self.field = None;
        self.ascending = false;
    }
}

/// Compares two cells for ascending order.
///
/// Dates compare chronologically, numbers numerically, booleans false-first,
/// everything else by display text. Mixed types fall back to display text.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        (x, y) => match (x.as_number(), y.as_number()) {
            (Some(nx), Some(ny)) => nx.partial_cmp(&ny).unwrap_or(Ordering::Equal),
            _ => x.display().cmp(&y.display()),
        },
    }
}

/// Direction-aware comparison that keeps nulls last in both directions.
pub fn compare_cells_directed(a: &CellValue, b: &CellValue, ascending: bool) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = compare_cells(a, b);
            if ascending { ordering } else { ordering.reverse() }
        }
    }
}

/// Sorts rows in place by one field. The sort is stable, so rows that
/// compare equal keep their incoming order.
pub fn sort_rows<R: GridRow>(rows: &mut [R], field: &str, ascending: bool) {
    rows.sort_by(|a, b| compare_cells_directed(&a.value(field), &b.value(field), ascending));
}
