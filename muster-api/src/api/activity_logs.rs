//! Activity log operations

use async_trait::async_trait;

use super::PageSource;
use super::page::ListEnvelope;
use super::page::ListPage;
use super::query::ListQuery;
use crate::ApiClient;
use crate::error::ApiError;
use crate::model::ActivityLog;

impl ApiClient {
    /// Lists recent activity log entries for the given query.
    pub async fn recent_activity(&self, query: &ListQuery) -> Result<ListPage<ActivityLog>, ApiError> {
        let envelope: ListEnvelope<ActivityLog> = self
            .get_json("/activity-logs/recent", &query.params())
            .await?;
        Ok(envelope.into_page(query))
    }
}

/// [`PageSource`] over the activity log listing.
#[derive(Clone)]
pub struct ActivityLogSource {
    client: ApiClient,
}

impl ActivityLogSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource<ActivityLog> for ActivityLogSource {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<ActivityLog>, ApiError> {
        self.client.recent_activity(query).await
    }
}
