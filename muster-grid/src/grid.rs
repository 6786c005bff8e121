//! Data grid state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::column::Column;
use crate::jump::PageJump;
use crate::pager::Pagination;
use crate::row::GridRow;
use crate::selection::{RowSelection, SelectionMode};
use crate::sort::{SortState, sort_rows};

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Internal state for the grid.
#[derive(Debug)]
pub(crate) struct GridInner<R: GridRow> {
    /// Column definitions.
    pub(crate) columns: Vec<Column>,
    /// The rows on the current page.
    pub(crate) rows: Vec<R>,
    /// Pagination facts for the footer.
    pub(crate) pagination: Pagination,
    /// Selection state (by row id).
    pub(crate) selection: RowSelection,
    /// Selection mode.
    pub(crate) selection_mode: SelectionMode,
    /// Current sort state.
    pub(crate) sort: SortState,
    /// `true` when the caller owns sorting (backend sorts). The grid then
    /// only records the state and reports header clicks.
    pub(crate) server_sort: bool,
    /// `true` while a fetch is in flight. Rows stay visible underneath.
    pub(crate) loading: bool,
    /// Message shown instead of rows when there are none.
    pub(crate) empty_text: String,
    /// Page-jump input state.
    pub(crate) jump: PageJump,
}

impl<R: GridRow> GridInner<R> {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            pagination: Pagination::default(),
            selection: RowSelection::new(),
            selection_mode: SelectionMode::None,
            sort: SortState::default(),
            server_sort: false,
            loading: false,
            empty_text: "No data available".to_string(),
            jump: PageJump::new(),
        }
    }

    fn page_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id()).collect()
    }
}

/// Reusable table state for admin listings.
///
/// `DataGrid<R>` owns the client-local pieces of a listing (sort state,
/// selection, page-jump input, pager math) and produces a
/// [`GridView`](crate::view::GridView) snapshot for whatever paints it.
/// Data stays with the caller: pages push each fetched page in through
/// [`DataGrid::set_rows`] and react to the intents grid mutators return.
///
/// Cheap to clone; clones share state.
#[derive(Debug)]
pub struct DataGrid<R: GridRow> {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    pub(crate) inner: Arc<RwLock<GridInner<R>>>,
    /// Dirty flag for re-render.
    pub(crate) dirty: Arc<AtomicBool>,
}

impl<R: GridRow> DataGrid<R> {
    /// Create a new grid with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(GridInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the selection mode.
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
        }
        self
    }

    /// Hand sorting to the caller.
    ///
    /// Header clicks still update the recorded sort state, but rows are
    /// left untouched; the caller refetches in the new order.
    pub fn with_server_sort(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.server_sort = true;
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Set the column definitions.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows on the current page.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the current page is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<R> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get all rows on the current page.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace the page of rows and its pagination facts.
    ///
    /// Selection is deliberately kept: it is keyed by id and survives page
    /// changes until explicitly cleared or replaced. With client-side
    /// sorting active, the new rows are sorted before they land.
    pub fn set_rows(&self, rows: Vec<R>, pagination: Pagination) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.pagination = pagination;
            if !guard.server_sort
                && let Some(field) = guard.sort.field.clone()
            {
                let ascending = guard.sort.ascending;
                sort_rows(&mut guard.rows, &field, ascending);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the loading flag. Rows stay visible while it is on.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.loading != loading
        {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the message shown when there are no rows.
    pub fn set_empty_text(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.empty_text = text.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current pagination facts.
    pub fn pagination(&self) -> Pagination {
        self.inner
            .read()
            .map(|g| g.pagination)
            .unwrap_or_default()
    }

    /// Navigate to a page, clamped to the valid range.
    pub fn set_page(&self, page: u32) {
        if let Ok(mut guard) = self.inner.write() {
            let last_page = guard.pagination.last_page;
            guard.pagination.current_page = page.clamp(1, last_page.max(1));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Change the page size. Navigation always returns to the first page.
    ///
    /// Returns the resulting pagination so callers that own fetching can
    /// refetch with it.
    pub fn change_per_page(&self, per_page: u32) -> Pagination {
        if let Ok(mut guard) = self.inner.write() {
            guard.pagination.per_page = per_page.max(1);
            guard.pagination.current_page = 1;
            guard.pagination.last_page =
                crate::pager::last_page_for(guard.pagination.total, guard.pagination.per_page);
            self.dirty.store(true, Ordering::SeqCst);
            return guard.pagination;
        }
        Pagination::default()
    }

    // -------------------------------------------------------------------------
    // Page jump
    // -------------------------------------------------------------------------

    /// Store page-jump input text.
    pub fn set_jump_input(&self, input: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.jump.set_input(input);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn jump_input(&self) -> String {
        self.inner
            .read()
            .map(|g| g.jump.input().to_string())
            .unwrap_or_default()
    }

    /// The current page-jump validation error, if any.
    pub fn jump_error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.jump.error().map(str::to_string))
    }

    /// Validate and commit the page-jump input.
    ///
    /// On success the grid navigates locally and the committed page comes
    /// back for callers that refetch.
    pub fn confirm_jump(&self) -> Option<u32> {
        if let Ok(mut guard) = self.inner.write() {
            let last_page = guard.pagination.last_page;
            let page = guard.jump.confirm(last_page);
            if let Some(page) = page {
                guard.pagination.current_page = page;
            }
            self.dirty.store(true, Ordering::SeqCst);
            return page;
        }
        None
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sort.clone())
            .unwrap_or_default()
    }

    /// Set sort state directly.
    ///
    /// This DOES NOT sort the rows - it just stores the state, for callers
    /// restoring a previous session or syncing with a backend order.
    pub fn set_sort(&self, field: impl Into<String>, ascending: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort.field = Some(field.into());
            guard.sort.ascending = ascending;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle sort for a column by field key.
    ///
    /// The same column flips direction; a new column starts ascending.
    /// Unknown and unsortable columns are ignored. With client-side sorting
    /// the rows are re-sorted in place; with server-side sorting the caller
    /// refetches using the returned state.
    pub fn toggle_sort(&self, field: &str) -> Option<(String, bool)> {
        if let Ok(mut guard) = self.inner.write()
            && guard
                .columns
                .iter()
                .any(|column| column.field == field && column.sortable)
        {
            let (field, ascending) = guard.sort.toggle(field);
            if !guard.server_sort {
                sort_rows(&mut guard.rows, &field, ascending);
            }
            self.dirty.store(true, Ordering::SeqCst);
            return Some((field, ascending));
        }
        None
    }

    /// Clear sort state.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// Set the selection mode. Switching to `None` clears the selection.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
            if mode == SelectionMode::None {
                guard.selection.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get all selected ids, in the order they were picked.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.inner
            .read()
            .map(|g| g.selection.ids())
            .unwrap_or_default()
    }

    /// Get all selected rows on the current page.
    pub fn selected_rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| {
                g.rows
                    .iter()
                    .filter(|row| g.selection.is_selected(row.id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Toggle one row's selection. Returns the new selection.
    pub fn toggle_select(&self, id: i64) -> Vec<i64> {
        if let Ok(mut guard) = self.inner.write() {
            match guard.selection_mode {
                SelectionMode::None => {}
                SelectionMode::Single => {
                    if guard.selection.is_selected(id) {
                        guard.selection.clear();
                    } else {
                        guard.selection.select_only(id);
                    }
                    self.dirty.store(true, Ordering::SeqCst);
                }
                SelectionMode::Multiple => {
                    guard.selection.toggle(id);
                    self.dirty.store(true, Ordering::SeqCst);
                }
            }
            return guard.selection.ids();
        }
        vec![]
    }

    /// Select every row on the current page, replacing the old selection.
    /// Returns the new selection.
    pub fn select_all_on_page(&self) -> Vec<i64> {
        if let Ok(mut guard) = self.inner.write()
            && guard.selection_mode == SelectionMode::Multiple
            && !guard.rows.is_empty()
        {
            let page_ids = guard.page_ids();
            let result = guard.selection.select_page(&page_ids);
            self.dirty.store(true, Ordering::SeqCst);
            return result;
        }
        vec![]
    }

    /// Clear all selection. Returns the ids that were deselected.
    pub fn deselect_all(&self) -> Vec<i64> {
        if let Ok(mut guard) = self.inner.write() {
            let result = guard.selection.clear();
            self.dirty.store(true, Ordering::SeqCst);
            return result;
        }
        vec![]
    }

    /// Replace the selection with an externally tracked set of ids.
    pub fn set_selected(&self, ids: Vec<i64>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection.set_ids(ids);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// `true` when every row on the current page is selected.
    pub fn all_on_page_selected(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.page_fully_selected(&g.page_ids()))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: GridRow> Clone for DataGrid<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<R: GridRow> Default for DataGrid<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
