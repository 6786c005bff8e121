//! Ordered row selection

use serde::Serialize;

/// Selection mode for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SelectionMode {
    /// No selection column.
    #[default]
    None,
    /// One row at a time.
    Single,
    /// Checkbox selection across rows.
    Multiple,
}

/// Tracks selected row ids, preserving the order they were picked in.
///
/// The selection is keyed by id, not by index, so it survives re-sorting
/// and page changes until something explicitly clears or replaces it.
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    selected: Vec<i64>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected ids, in the order they were picked.
    pub fn ids(&self) -> Vec<i64> {
        self.selected.clone()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Toggles one row. Removal keeps the order of everything else.
    /// Returns `true` when the row ended up selected.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(position) = self.selected.iter().position(|existing| *existing == id) {
            self.selected.remove(position);
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    /// Selects exactly one row, dropping everything else.
    pub fn select_only(&mut self, id: i64) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Replaces the whole selection with the given page of ids.
    ///
    /// Checking the header box selects exactly the visible page; rows
    /// selected elsewhere are dropped rather than merged.
    pub fn select_page(&mut self, page_ids: &[i64]) -> Vec<i64> {
        self.selected = page_ids.to_vec();
        self.ids()
    }

    /// Clears the selection. Returns the ids that were removed.
    pub fn clear(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.selected)
    }

    /// Replaces the selection with an externally tracked set.
    pub fn set_ids(&mut self, ids: Vec<i64>) {
        self.selected = ids;
    }

    /// `true` when every id on the page is selected and the page is
    /// non-empty.
    pub fn page_fully_selected(&self, page_ids: &[i64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.is_selected(*id))
    }
}
