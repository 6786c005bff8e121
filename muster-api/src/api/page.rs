//! Pagination envelopes
//!
//! List endpoints answer in three shapes: a flat envelope with pagination
//! fields next to `data`, a nested `pagination` object, or (older endpoints)
//! a bare array. [`ListEnvelope`] accepts all of them and normalizes into
//! [`ListPage`].

use serde::Deserialize;

use super::query::ListQuery;

/// Pagination facts for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based page number.
    pub current_page: u32,
    /// Rows per page.
    pub per_page: u32,
    /// Total rows across all pages.
    pub total: u64,
    /// Last page number, never below 1.
    pub last_page: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 10,
            total: 0,
            last_page: 1,
        }
    }
}

impl PageInfo {
    /// Computes the last page for a total and page size.
    ///
    /// An empty result set still has one (empty) page.
    pub fn last_page_for(total: u64, per_page: u32) -> u32 {
        if per_page == 0 {
            return 1;
        }
        total.div_ceil(u64::from(per_page)).max(1) as u32
    }
}

/// One page of entity rows plus its pagination facts.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> ListPage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            info: PageInfo::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The envelope shapes list endpoints respond with.
///
/// Variant order matters for `untagged`: the nested shape must be tried
/// before the flat one, since a nested body also has a `data` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListEnvelope<T> {
    Nested {
        data: Vec<T>,
        pagination: RawPagination,
    },
    Flat {
        data: Vec<T>,
        #[serde(flatten)]
        pagination: RawPagination,
    },
    Bare(Vec<T>),
}

/// Pagination fields in the spellings different endpoints use.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPagination {
    #[serde(default, alias = "current_page")]
    page: Option<u32>,
    #[serde(default, alias = "per_page")]
    limit: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default, alias = "totalPages", alias = "last_page")]
    pages: Option<u32>,
}

impl<T> ListEnvelope<T> {
    /// Normalizes whichever shape arrived, falling back to the query that
    /// produced it for anything the backend left out.
    pub(crate) fn into_page(self, query: &ListQuery) -> ListPage<T> {
        let (items, raw) = match self {
            Self::Nested { data, pagination } => (data, pagination),
            Self::Flat { data, pagination } => (data, pagination),
            Self::Bare(data) => (data, RawPagination::default()),
        };

        let per_page = raw.limit.unwrap_or(query.limit).max(1);
        let total = raw.total.unwrap_or(items.len() as u64);
        let current_page = raw.page.unwrap_or(query.page).max(1);
        let last_page = raw
            .pages
            .unwrap_or_else(|| PageInfo::last_page_for(total, per_page));

        ListPage {
            items,
            info: PageInfo {
                current_page,
                per_page,
                total,
                last_page,
            },
        }
    }
}

/// Single-object responses, which some endpoints wrap in `{ data: ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeWrapped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeWrapped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(value) => value,
        }
    }
}
