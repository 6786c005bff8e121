//! Page strip windowing and the range summary

use serde::Serialize;

/// Page sizes offered by the per-page selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Pagination facts the pager renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub current_page: u32,
    /// Rows per page.
    pub per_page: u32,
    /// Total rows across all pages.
    pub total: u64,
    /// Last page number, never below 1.
    pub last_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 10,
            total: 0,
            last_page: 1,
        }
    }
}

impl Pagination {
    /// First 1-based item index on this page, 0 when there are no rows.
    pub fn first_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        u64::from(self.current_page - 1) * u64::from(self.per_page) + 1
    }

    /// Last 1-based item index on this page.
    pub fn last_item(&self) -> u64 {
        (u64::from(self.current_page) * u64::from(self.per_page)).min(self.total)
    }

    /// The "Showing X to Y of Z entries" footer line.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_item(),
            self.last_item(),
            self.total
        )
    }
}

/// The last page for a total row count at a page size, never below one.
pub fn last_page_for(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(u64::from(per_page)).max(1) as u32
}

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    /// A clickable page number.
    Page(u32),
    /// An ellipsis standing for two or more hidden pages.
    Gap,
}

/// Windows page numbers around the current page.
///
/// The first and last pages always show, plus the current page and one
/// neighbor on each side. A hole of exactly one page shows that page's
/// number; wider holes collapse to a single [`PageItem::Gap`], so an
/// ellipsis never stands for just one hidden page.
pub fn page_numbers(current_page: u32, last_page: u32) -> Vec<PageItem> {
    let last_page = last_page.max(1);
    let left = current_page.saturating_sub(1);
    let right = current_page.saturating_add(2);

    let mut kept = Vec::new();
    for page in 1..=last_page {
        if page == 1 || page == last_page || (page >= left && page < right) {
            kept.push(page);
        }
    }

    let mut strip = Vec::with_capacity(kept.len());
    let mut previous: Option<u32> = None;
    for page in kept {
        if let Some(previous) = previous {
            if page - previous == 2 {
                strip.push(PageItem::Page(previous + 1));
            } else if page - previous > 2 {
                strip.push(PageItem::Gap);
            }
        }
        strip.push(PageItem::Page(page));
        previous = Some(page);
    }
    strip
}
