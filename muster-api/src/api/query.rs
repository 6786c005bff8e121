//! List query parameters
//!
//! All entity listings share one wire grammar: `page`, `limit`, `sortBy`,
//! `sortOrder`, and `search`, plus endpoint-specific filters such as
//! `instituteId`.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The uppercase token the backend expects.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Maps a grid's ascending flag onto a direction.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }
}

/// Query parameters shared by all entity list endpoints.
///
/// # Example
///
/// ```
/// use muster_api::api::query::{ListQuery, SortOrder};
///
/// let query = ListQuery::new()
///     .page(2)
///     .limit(20)
///     .sort("institute_name", SortOrder::Desc)
///     .search("mumbai");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub limit: u32,
    /// Field to sort by. `None` leaves the backend's default order.
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    /// Free-text search. Left off the wire when empty.
    pub search: String,
    /// Endpoint-specific filters, e.g. `("instituteId", "7")`.
    pub filters: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort_by: None,
            sort_order: None,
            search: String::new(),
            filters: Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sorts by a field in the given direction.
    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Appends an endpoint-specific filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Replaces the filter under `key`, removing it when `value` is `None`.
    pub fn set_filter(&mut self, key: &str, value: Option<String>) {
        self.filters.retain(|(existing, _)| existing != key);
        if let Some(value) = value {
            self.filters.push((key.to_string(), value));
        }
    }

    /// Drops any sort back to the backend's default order.
    pub fn clear_sort(&mut self) {
        self.sort_by = None;
        self.sort_order = None;
    }

    /// The wire query parameters.
    ///
    /// `sortBy`/`sortOrder` only appear when a sort is set, and `search`
    /// only when non-empty. An unset direction defaults to ascending.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        if let Some(sort_by) = &self.sort_by {
            let order = self.sort_order.unwrap_or(SortOrder::Asc);
            params.push(("sortBy".to_string(), sort_by.clone()));
            params.push(("sortOrder".to_string(), order.as_wire().to_string()));
        }

        if !self.search.is_empty() {
            params.push(("search".to_string(), self.search.clone()));
        }

        for (key, value) in &self.filters {
            params.push((key.clone(), value.clone()));
        }

        params
    }
}
