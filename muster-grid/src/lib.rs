//! Headless data grid
//!
//! Reusable tabular state for admin listings: typed cell values, sortable
//! columns, ordered row selection, a windowed page strip, and a render
//! snapshot a front end can paint without owning any grid logic. The grid
//! renders nothing itself and fetches nothing itself; data flows in through
//! [`DataGrid::set_rows`](grid::DataGrid::set_rows) and intents (header
//! clicks, pager actions) flow back out as return values.

pub mod column;
pub mod grid;
pub mod jump;
pub mod pager;
pub mod row;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;

pub mod prelude {
    pub use crate::column::{Alignment, CellKind, Column};
    pub use crate::grid::{DataGrid, GridId};
    pub use crate::jump::PageJump;
    pub use crate::pager::{PAGE_SIZE_OPTIONS, PageItem, Pagination, page_numbers};
    pub use crate::row::GridRow;
    pub use crate::selection::{RowSelection, SelectionMode};
    pub use crate::sort::SortState;
    pub use crate::value::CellValue;
    pub use crate::view::{CellContent, CellView, GridView, HeaderView, PagerView, RowView};
}
