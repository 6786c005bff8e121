//! Paged data source seam

use async_trait::async_trait;

use super::page::ListPage;
use super::query::ListQuery;
use crate::error::ApiError;

/// A source of paged entity listings.
///
/// Listing controllers depend on this trait instead of on
/// [`ApiClient`](crate::ApiClient) directly, so they can be driven by canned
/// pages in tests or by caching layers in front of the real client.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetches one page of results for the given query.
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<T>, ApiError>;
}
