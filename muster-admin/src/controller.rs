//! Listing query controllers.
//!
//! A [`ListController`] owns one entity listing's query (page, page size,
//! sort, search, filters), issues fetches through a [`PageSource`], and
//! keeps the latest page of rows for the grid to sync from. Interaction
//! handlers mutate the query and refetch; free-text search debounces.
//!
//! Responses are sequence-stamped: every fetch takes the next stamp, and a
//! response only lands while its stamp is still the newest. A slow page-1
//! response arriving after page 2 was requested is discarded instead of
//! overwriting the fresher rows.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use log::{debug, error, warn};
use muster_api::api::PageSource;
use muster_api::api::page::PageInfo;
use muster_api::api::query::{ListQuery, SortOrder};
use tokio_util::sync::CancellationToken;

use crate::notify::{Notifier, Toast};

/// Debounce for listings that search as the user types.
pub const SEARCH_DEBOUNCE_FAST: Duration = Duration::from_millis(300);
/// Debounce for heavier listings.
pub const SEARCH_DEBOUNCE_SLOW: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct ControllerState<T> {
    rows: Vec<T>,
    info: PageInfo,
    query: ListQuery,
    loading: bool,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            info: PageInfo::default(),
            query: ListQuery::default(),
            loading: false,
        }
    }
}

/// Query state and fetch orchestration for one entity listing.
///
/// Cheap to clone; clones share state, so background tasks can finish a
/// fetch after the caller moved on.
pub struct ListController<T> {
    source: Arc<dyn PageSource<T>>,
    state: Arc<RwLock<ControllerState<T>>>,
    /// Stamp of the newest fetch; responses from older stamps are dropped.
    seq: Arc<AtomicU64>,
    debounce: Duration,
    debounce_token: Arc<Mutex<Option<CancellationToken>>>,
    dirty: Arc<AtomicBool>,
    notifier: Notifier,
}

impl<T: Send + Sync + 'static> ListController<T> {
    pub fn new(source: impl PageSource<T> + 'static, notifier: Notifier) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(RwLock::new(ControllerState::default())),
            seq: Arc::new(AtomicU64::new(0)),
            debounce: SEARCH_DEBOUNCE_FAST,
            debounce_token: Arc::new(Mutex::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
            notifier,
        }
    }

    /// Set the search debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// The current query, as it would go on the wire.
    pub fn query(&self) -> ListQuery {
        self.state
            .read()
            .map(|state| state.query.clone())
            .unwrap_or_default()
    }

    /// Pagination facts from the last landed response.
    pub fn page_info(&self) -> PageInfo {
        self.state
            .read()
            .map(|state| state.info)
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().map(|state| state.loading).unwrap_or(false)
    }

    /// The last landed page of rows.
    pub fn rows(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.state
            .read()
            .map(|state| state.rows.clone())
            .unwrap_or_default()
    }

    /// Check-and-clear flag set whenever controller state changes, so
    /// pages know to re-sync their grid after background fetches.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    /// Issue the current query and land the response, unless a newer fetch
    /// started in the meantime.
    pub async fn fetch(&self) {
        let stamp = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let query = self.query();
        debug!(
            "Fetching page {} (limit {}, search {:?})",
            query.page, query.limit, query.search
        );

        if let Ok(mut state) = self.state.write() {
            state.loading = true;
            self.dirty.store(true, Ordering::SeqCst);
        }

        let result = self.source.fetch_page(&query).await;

        if let Ok(mut state) = self.state.write() {
            if self.seq.load(Ordering::SeqCst) != stamp {
                warn!("Discarding stale response for page {}", query.page);
                return;
            }
            match result {
                Ok(page) => {
                    state.rows = page.items;
                    state.info = page.info;
                }
                Err(e) => {
                    // Keep the rows already on screen; the user retries
                    // via refresh.
                    error!("List fetch failed: {e}");
                    self.notifier.push(Toast::error(e.user_message()));
                }
            }
            state.loading = false;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Initial load for a page controller that just mounted.
    pub async fn load(&self) {
        self.fetch().await;
    }

    // -------------------------------------------------------------------------
    // Interaction handlers
    // -------------------------------------------------------------------------

    /// Navigate to a page.
    pub async fn set_page(&self, page: u32) {
        if let Ok(mut state) = self.state.write() {
            state.query.page = page.max(1);
        }
        self.fetch().await;
    }

    /// Change the page size. Navigation returns to the first page.
    pub async fn set_per_page(&self, limit: u32) {
        if let Ok(mut state) = self.state.write() {
            state.query.limit = limit.max(1);
            state.query.page = 1;
        }
        self.fetch().await;
    }

    /// Apply a sort reported by the grid. A new sort always restarts from
    /// the first page.
    pub async fn sort_changed(&self, field: impl Into<String>, ascending: bool) {
        if let Ok(mut state) = self.state.write() {
            state.query.sort_by = Some(field.into());
            state.query.sort_order = Some(SortOrder::from_ascending(ascending));
            state.query.page = 1;
        }
        self.fetch().await;
    }

    /// Replace an endpoint-specific filter and refetch from page 1.
    pub async fn set_filter(&self, key: &str, value: Option<String>) {
        if let Ok(mut state) = self.state.write() {
            state.query.set_filter(key, value);
            state.query.page = 1;
        }
        self.fetch().await;
    }

    /// Record new search input and schedule a debounced fetch.
    ///
    /// The query updates immediately; the fetch fires after the debounce
    /// window unless newer input cancels it first.
    pub fn search_changed(&self, text: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.query.search = text.into();
            state.query.page = 1;
        }

        let token = CancellationToken::new();
        if let Ok(mut slot) = self.debounce_token.lock()
            && let Some(previous) = slot.replace(token.clone())
        {
            previous.cancel();
        }

        let controller = self.clone();
        let debounce = self.debounce;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(debounce) => {
                    controller.fetch().await;
                }
            }
        });
    }

    /// Re-issue the current query unchanged.
    pub async fn refresh(&self) {
        self.fetch().await;
    }

    /// Explicit user-triggered refresh. Announces itself regardless of the
    /// fetch outcome; a failure surfaces its own toast alongside.
    pub async fn refresh_requested(&self) {
        self.refresh().await;
        self.notifier.push(Toast::success("Data refreshed"));
    }

    /// Clear search and sort back to defaults and reload from page 1,
    /// keeping the page size and any endpoint filters.
    pub async fn reset_and_refresh(&self) {
        if let Ok(mut state) = self.state.write() {
            state.query.search.clear();
            state.query.clear_sort();
            state.query.page = 1;
        }
        self.fetch().await;
    }
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
            seq: Arc::clone(&self.seq),
            debounce: self.debounce,
            debounce_token: Arc::clone(&self.debounce_token),
            dirty: Arc::clone(&self.dirty),
            notifier: self.notifier.clone(),
        }
    }
}
