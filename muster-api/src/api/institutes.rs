//! Institute operations

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::multipart::Part;

use super::PageSource;
use super::page::ListEnvelope;
use super::page::ListPage;
use super::query::ListQuery;
use crate::ApiClient;
use crate::error::ApiError;
use crate::model::EmailDispatch;
use crate::model::Institute;
use crate::model::InstitutePayload;

impl ApiClient {
    /// Lists institutes for the given query.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let query = ListQuery::new().search("mumbai");
    /// let page = client.list_institutes(&query).await?;
    /// println!("{} of {} institutes", page.len(), page.info.total);
    /// ```
    pub async fn list_institutes(&self, query: &ListQuery) -> Result<ListPage<Institute>, ApiError> {
        let envelope: ListEnvelope<Institute> =
            self.get_json("/institutes", &query.params()).await?;
        Ok(envelope.into_page(query))
    }

    /// Creates an institute.
    pub async fn create_institute(&self, payload: &InstitutePayload) -> Result<(), ApiError> {
        self.post_json("/institutes", payload).await
    }

    /// Updates an existing institute.
    pub async fn update_institute(&self, id: i64, payload: &InstitutePayload) -> Result<(), ApiError> {
        self.put_json(&format!("/institutes/{id}"), payload).await
    }

    /// Deletes an institute.
    pub async fn delete_institute(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/institutes/{id}")).await
    }

    /// Sends a bulk email to the selected institutes.
    ///
    /// The target ids travel as a JSON array inside the multipart body,
    /// which is the encoding the backend expects from its web client.
    pub async fn send_institute_email(&self, dispatch: &EmailDispatch) -> Result<(), ApiError> {
        let ids = serde_json::to_string(&dispatch.institute_ids)
            .map_err(|e| ApiError::parse(e.to_string()))?;

        let mut form = Form::new()
            .text("instituteIds", ids)
            .text("subject", dispatch.subject.clone())
            .text("description", dispatch.description.clone());

        if let Some(attachment) = &dispatch.attachment {
            let part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
            form = form.part("file", part);
        }

        self.post_multipart("/institutes/send-email", form).await
    }
}

/// [`PageSource`] over the institutes listing.
#[derive(Clone)]
pub struct InstituteSource {
    client: ApiClient,
}

impl InstituteSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource<Institute> for InstituteSource {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<Institute>, ApiError> {
        self.client.list_institutes(query).await
    }
}
