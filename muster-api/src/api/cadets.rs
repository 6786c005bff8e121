//! Cadet operations

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::multipart::Part;

use super::PageSource;
use super::page::ListEnvelope;
use super::page::ListPage;
use super::query::ListQuery;
use crate::ApiClient;
use crate::error::ApiError;
use crate::model::Cadet;
use crate::model::CadetImport;
use crate::model::FileUpload;
use crate::model::ImportOutcome;

impl ApiClient {
    /// Lists cadets for the given query.
    ///
    /// Restricting to one institute is done with an `instituteId` filter on
    /// the query, not a separate endpoint.
    pub async fn list_cadets(&self, query: &ListQuery) -> Result<ListPage<Cadet>, ApiError> {
        let envelope: ListEnvelope<Cadet> = self.get_json("/cadets", &query.params()).await?;
        Ok(envelope.into_page(query))
    }

    /// Imports cadets from an uploaded spreadsheet.
    ///
    /// The file goes up under the `excelFile` part together with the batch
    /// metadata. The backend parses the sheet and answers with how many rows
    /// it took.
    pub async fn import_cadets(
        &self,
        file: &FileUpload,
        import: &CadetImport,
    ) -> Result<ImportOutcome, ApiError> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());

        let form = Form::new()
            .part("excelFile", part)
            .text("instituteId", import.institute_id.to_string())
            .text("batchName", import.batch_name.clone())
            .text("department", import.department.as_wire())
            .text(
                "passingOutDate",
                import.passing_out_date.format("%Y-%m-%d").to_string(),
            );

        self.post_multipart_as("/cadets/import", form).await
    }
}

/// [`PageSource`] over the cadets listing.
#[derive(Clone)]
pub struct CadetSource {
    client: ApiClient,
}

impl CadetSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource<Cadet> for CadetSource {
    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<Cadet>, ApiError> {
        self.client.list_cadets(query).await
    }
}
