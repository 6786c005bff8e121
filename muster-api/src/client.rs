//! Main ApiClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::error::ServerMessage;
use crate::session::SessionContext;

/// The main client for the muster recruitment REST API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. Every outbound request reads its bearer credential
/// from the [`SessionContext`] supplied at construction time, so signing in
/// or out takes effect immediately on all clones.
///
/// # Example
///
/// ```ignore
/// use muster_api::ApiClient;
/// use muster_api::session::SessionContext;
///
/// let session = SessionContext::new();
/// session.sign_in_token("my-token");
///
/// let client = ApiClient::builder()
///     .base_url("https://recruitment.example.com/api")
///     .session(session)
///     .build();
///
/// let page = client.list_institutes(&Default::default()).await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    session: SessionContext,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ApiClientBuilder<Missing, Missing> {
        ApiClientBuilder::new()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the session context this client reads credentials from.
    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.inner.base_url.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Sends a prepared request with the session bearer attached and turns
    /// non-success statuses into [`ApiError::Http`].
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let mut request = request;

        if let Some(token) = self.inner.session.bearer_token() {
            request = request.bearer_auth(token);
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let server: Option<ServerMessage> = serde_json::from_str(&body).ok();
        let message = server
            .as_ref()
            .and_then(|m| m.text())
            .map(str::to_string)
            .unwrap_or_else(|| body.clone());

        Err(ApiError::Http {
            status,
            message,
            body: server.map(Box::new),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.inner.timeout.unwrap_or(Duration::ZERO))
        } else {
            ApiError::Network(error)
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = response.text().await.map_err(ApiError::Network)?;
        serde_json::from_str(&body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let mut request = self.inner.http_client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// POSTs a JSON body, discarding whatever the backend answers with.
    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.http_client.post(url).json(body)).await?;
        Ok(())
    }

    /// POSTs a JSON body and decodes the response.
    pub(crate) async fn post_json_as<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self.send(self.inner.http_client.post(url).json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.http_client.put(url).json(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.http_client.delete(url)).await?;
        Ok(())
    }

    /// POSTs a multipart form, discarding the response body.
    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.http_client.post(url).multipart(form))
            .await?;
        Ok(())
    }

    /// POSTs a multipart form and decodes the response.
    pub(crate) async fn post_multipart_as<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .send(self.inner.http_client.post(url).multipart(form))
            .await?;
        Self::decode(response).await
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`ApiClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `base_url` - The backend API root
/// - `session` - The [`SessionContext`] credentials are read from
///
/// # Example
///
/// ```ignore
/// let client = ApiClient::builder()
///     .base_url("https://recruitment.example.com/api")
///     .session(session)
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct ApiClientBuilder<Url, Session> {
    base_url: Url,
    session: Session,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ApiClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            session: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for ApiClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ApiClientBuilder<Missing, S> {
    /// Sets the backend API root.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .base_url("https://recruitment.example.com/api")
    /// ```
    pub fn base_url(self, url: impl Into<String>) -> ApiClientBuilder<Set<String>, S> {
        ApiClientBuilder {
            base_url: Set(url.into()),
            session: self.session,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> ApiClientBuilder<U, Missing> {
    /// Sets the session context requests authenticate from.
    pub fn session(self, session: SessionContext) -> ApiClientBuilder<U, Set<SessionContext>> {
        ApiClientBuilder {
            base_url: self.base_url,
            session: Set(session),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, S> ApiClientBuilder<U, S> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl ApiClientBuilder<Set<String>, Set<SessionContext>> {
    /// Builds the [`ApiClient`].
    ///
    /// This method is only available when both `base_url` and `session` have been set.
    pub fn build(self) -> ApiClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: self.base_url.0,
                session: self.session.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}
