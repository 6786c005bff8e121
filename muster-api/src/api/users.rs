//! Admin user operations

use async_trait::async_trait;

use super::PageSource;
use super::page::ListEnvelope;
use super::page::ListPage;
use super::page::MaybeWrapped;
use super::query::ListQuery;
use crate::ApiClient;
use crate::error::ApiError;
use crate::model::NewUser;
use crate::model::User;
use crate::model::UserUpdate;

impl ApiClient {
    /// Lists admin users for the given query.
    ///
    /// This endpoint is the oldest of the listings and sometimes answers
    /// with a bare array; the envelope normalization fills pagination in
    /// from the query.
    pub async fn list_users(&self, query: &ListQuery) -> Result<ListPage<User>, ApiError> {
        let envelope: ListEnvelope<User> = self.get_json("/users", &query.params()).await?;
        Ok(envelope.into_page(query))
    }

    /// Fetches a single user.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        let user: MaybeWrapped<User> = self.get_json(&format!("/users/{id}"), &[]).await?;
        Ok(user.into_inner())
    }

    /// Creates a user.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.post_json("/users", user).await
    }

    /// Updates an existing user.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<(), ApiError> {
        self.put_json(&format!("/users/{id}"), update).await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{id}")).await
    }
}

/// [`PageSource`] over the users listing.
#[derive(Clone)]
pub struct UserSource {
    client: ApiClient,
}

impl UserSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource<User> for UserSource {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<User>, ApiError> {
        self.client.list_users(query).await
    }
}
