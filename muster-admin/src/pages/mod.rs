//! Per-entity pages.
//!
//! Each page wires a [`ListController`](crate::controller::ListController)
//! to a grid: the controller owns the backend query, the grid owns
//! render-local state (sort marker, selection, page-jump input), and the
//! page translates grid intents into controller calls. After any
//! controller activity, each page's `sync` pushes the landed rows back
//! into the grid; pages poll for that from their event loop since fetches
//! finish on background tasks.

mod activity_logs;
mod cadets;
mod institutes;
mod users;

pub use activity_logs::*;
pub use cadets::*;
pub use institutes::*;
pub use users::*;

use muster_api::api::page::PageInfo;
use muster_grid::pager::Pagination;

/// Map a response's pagination facts onto the grid's pager.
fn to_pagination(info: PageInfo) -> Pagination {
    Pagination {
        current_page: info.current_page,
        per_page: info.per_page,
        total: info.total,
        last_page: info.last_page,
    }
}
