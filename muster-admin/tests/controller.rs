use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use muster_admin::controller::ListController;
use muster_admin::notify::{Notifier, ToastLevel};
use muster_api::api::PageSource;
use muster_api::api::page::{ListPage, PageInfo};
use muster_api::api::query::{ListQuery, SortOrder};
use muster_api::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: i64,
    label: String,
}

fn item(id: i64) -> Item {
    Item {
        id,
        label: format!("item {id}"),
    }
}

/// Canned page source: answers every query with rows derived from the
/// requested page, records the queries it saw, and can be told to fail or
/// to answer the first page slowly.
#[derive(Clone, Default)]
struct FakeSource {
    calls: Arc<Mutex<Vec<ListQuery>>>,
    fail: Arc<AtomicBool>,
    slow_page_one: Arc<AtomicBool>,
}

impl FakeSource {
    fn calls(&self) -> Vec<ListQuery> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl PageSource<Item> for FakeSource {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<Item>, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.clone());
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::http(500, "Database unavailable"));
        }
        if query.page == 1 && self.slow_page_one.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        // Page n holds ids n*10 .. n*10+2 over a fixed total of 35 rows.
        let base = i64::from(query.page) * 10;
        Ok(ListPage {
            items: vec![item(base), item(base + 1), item(base + 2)],
            info: PageInfo {
                current_page: query.page,
                per_page: query.limit,
                total: 35,
                last_page: PageInfo::last_page_for(35, query.limit),
            },
        })
    }
}

fn make_controller(source: &FakeSource) -> ListController<Item> {
    ListController::new(source.clone(), Notifier::default())
}

#[tokio::test]
async fn test_load_lands_rows_and_page_info() {
    let source = FakeSource::default();
    let controller = make_controller(&source);

    controller.load().await;

    assert_eq!(controller.rows(), vec![item(10), item(11), item(12)]);
    assert_eq!(controller.page_info().current_page, 1);
    assert_eq!(controller.page_info().total, 35);
    assert_eq!(controller.page_info().last_page, 4);
    assert!(!controller.is_loading());
    assert!(controller.take_dirty());
}

#[tokio::test]
async fn test_set_page_refetches_that_page() {
    let source = FakeSource::default();
    let controller = make_controller(&source);
    controller.load().await;

    controller.set_page(3).await;

    assert_eq!(controller.query().page, 3);
    assert_eq!(controller.rows(), vec![item(30), item(31), item(32)]);
    let calls = source.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].page, 3);
}

#[tokio::test]
async fn test_set_page_clamps_below_one() {
    let source = FakeSource::default();
    let controller = make_controller(&source);

    controller.set_page(0).await;

    assert_eq!(controller.query().page, 1);
}

#[tokio::test]
async fn test_set_per_page_returns_to_first_page() {
    let source = FakeSource::default();
    let controller = make_controller(&source);
    controller.set_page(3).await;

    controller.set_per_page(50).await;

    let query = controller.query();
    assert_eq!(query.limit, 50);
    assert_eq!(query.page, 1);
}

#[tokio::test]
async fn test_sort_changed_restarts_from_first_page() {
    let source = FakeSource::default();
    let controller = make_controller(&source);
    controller.set_page(2).await;

    controller.sort_changed("institute_name", false).await;

    let query = controller.query();
    assert_eq!(query.page, 1);
    assert_eq!(query.sort_by.as_deref(), Some("institute_name"));
    assert_eq!(query.sort_order, Some(SortOrder::Desc));
}

#[tokio::test]
async fn test_set_filter_replaces_and_refetches() {
    let source = FakeSource::default();
    let controller = make_controller(&source);
    controller.set_page(2).await;

    controller.set_filter("instituteId", Some("7".into())).await;
    assert_eq!(
        controller.query().filters,
        vec![("instituteId".to_string(), "7".to_string())]
    );
    assert_eq!(controller.query().page, 1);

    controller.set_filter("instituteId", None).await;
    assert!(controller.query().filters.is_empty());
}

#[tokio::test]
async fn test_failed_fetch_keeps_rows_and_toasts_server_message() {
    let source = FakeSource::default();
    let notifier = Notifier::default();
    let controller = ListController::new(source.clone(), notifier.clone());
    controller.load().await;
    let landed = controller.rows();

    source.set_fail(true);
    controller.set_page(2).await;

    assert_eq!(controller.rows(), landed);
    assert!(!controller.is_loading());
    let toasts = notifier.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, "Database unavailable");
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let source = FakeSource::default();
    source.slow_page_one.store(true, Ordering::SeqCst);
    let controller = make_controller(&source);

    // Start a slow page-1 fetch, then ask for page 2 while it is in flight.
    let background = controller.clone();
    let first = tokio::spawn(async move { background.load().await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    controller.set_page(2).await;

    assert_eq!(controller.rows(), vec![item(20), item(21), item(22)]);

    first.await.unwrap();

    // The page-1 response came back after page 2 landed and must not
    // overwrite it.
    assert_eq!(controller.rows(), vec![item(20), item(21), item(22)]);
    assert_eq!(controller.page_info().current_page, 2);
    assert!(!controller.is_loading());
}

#[tokio::test]
async fn test_search_debounces_to_one_fetch() {
    let source = FakeSource::default();
    let controller = ListController::new(source.clone(), Notifier::default())
        .with_debounce(Duration::from_millis(30));
    controller.set_page(3).await;
    assert_eq!(source.calls().len(), 1);

    controller.search_changed("m");
    controller.search_changed("mu");
    controller.search_changed("mum");
    assert_eq!(controller.query().search, "mum");
    assert_eq!(controller.query().page, 1);

    tokio::time::sleep(Duration::from_millis(120)).await;

    let calls = source.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].search, "mum");
    assert_eq!(calls[1].page, 1);
}

#[tokio::test]
async fn test_refresh_preserves_query() {
    let source = FakeSource::default();
    let controller = make_controller(&source);
    controller.set_per_page(20).await;
    controller.sort_changed("name", true).await;
    controller.set_page(2).await;
    let before = controller.query();

    controller.refresh().await;

    assert_eq!(controller.query(), before);
    let calls = source.calls();
    assert_eq!(calls.last().map(|q| q.page), Some(2));
    assert_eq!(
        calls.last().and_then(|q| q.sort_by.clone()).as_deref(),
        Some("name")
    );
}

#[tokio::test]
async fn test_refresh_requested_announces_itself() {
    let source = FakeSource::default();
    let notifier = Notifier::default();
    let controller = ListController::new(source.clone(), notifier.clone());
    controller.load().await;
    notifier.drain();

    controller.refresh_requested().await;

    let toasts = notifier.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].message, "Data refreshed");
}

#[tokio::test]
async fn test_reset_and_refresh_clears_search_and_sort() {
    let source = FakeSource::default();
    let controller = ListController::new(source.clone(), Notifier::default())
        .with_debounce(Duration::from_millis(10));
    controller.set_per_page(20).await;
    controller.sort_changed("name", false).await;
    controller.search_changed("mumbai");
    tokio::time::sleep(Duration::from_millis(50)).await;

    controller.reset_and_refresh().await;

    let query = controller.query();
    assert!(query.search.is_empty());
    assert!(query.sort_by.is_none());
    assert!(query.sort_order.is_none());
    assert_eq!(query.page, 1);
    // Page size survives a reset.
    assert_eq!(query.limit, 20);
}
