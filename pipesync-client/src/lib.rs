//! Pipesync HTTP Client
//!
//! A small, typed HTTP client for the Sophos Factory pipelines API.
//!
//! Every call is scoped to one project and authenticated with a bearer
//! token. The `FactoryApi` trait exposes the operations the publish workflow
//! needs so that callers can substitute a fake in tests.
//!
//! # Example
//!
//! ```no_run
//! use pipesync_client::FactoryClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = FactoryClient::new("https://api.refactr.it/v1", "my-project", "token");
//!
//!     let search = client.search_pipelines("nightly-build").await?;
//!     println!("Found {} pipeline(s)", search.pipelines.len());
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod pipelines;
mod revisions;

// Re-export commonly used types
pub use api::FactoryApi;
pub use error::{ClientError, Result};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::fmt;

/// Default base URL of the Factory API (version 1)
pub const DEFAULT_API_URL: &str = "https://api.refactr.it/v1";

const JSON: &str = "application/json";

/// HTTP client for the Factory pipelines API of a single project
#[derive(Clone)]
pub struct FactoryClient {
    /// Pipelines collection URL (e.g., "https://api.refactr.it/v1/projects/<id>/pipelines")
    pipelines_url: String,
    /// Bearer token sent on every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl FactoryClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the API (e.g., "https://api.refactr.it/v1")
    /// * `project_id` - Project the pipelines belong to
    /// * `token` - API access token
    ///
    /// # Example
    /// ```
    /// use pipesync_client::FactoryClient;
    ///
    /// let client = FactoryClient::new("https://api.refactr.it/v1/", "p1", "secret");
    /// assert_eq!(client.pipelines_url(), "https://api.refactr.it/v1/projects/p1/pipelines");
    /// ```
    pub fn new(
        api_url: impl AsRef<str>,
        project_id: impl AsRef<str>,
        token: impl Into<String>,
    ) -> Self {
        Self::with_client(api_url, project_id, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        api_url: impl AsRef<str>,
        project_id: impl AsRef<str>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            pipelines_url: format!(
                "{}/projects/{}/pipelines",
                api_url.as_ref().trim_end_matches('/'),
                project_id.as_ref()
            ),
            token: token.into(),
            client,
        }
    }

    /// Get the pipelines collection URL
    pub fn pipelines_url(&self) -> &str {
        &self.pipelines_url
    }

    // =============================================================================
    // Request Builders
    // =============================================================================

    /// Authenticated GET request
    fn get(&self, url: &str) -> RequestBuilder {
        tracing::debug!("GET {}", url);
        self.client
            .get(url)
            .header(ACCEPT, JSON)
            .bearer_auth(&self.token)
    }

    /// Authenticated POST request carrying a JSON body
    fn post(&self, url: &str) -> RequestBuilder {
        tracing::debug!("POST {}", url);
        self.client
            .post(url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .bearer_auth(&self.token)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become `ClientError::ApiError` carrying the
    /// status code, its reason phrase and whatever body the service sent.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Like `handle_response`, but an empty success body yields `T::default()`
    async fn handle_optional_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return Ok(T::default());
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown status");
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            reason.to_string()
        } else {
            format!("{} - {}", reason, body)
        };
        Err(ClientError::api_error(status.as_u16(), message))
    }
}

impl fmt::Debug for FactoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryClient")
            .field("pipelines_url", &self.pipelines_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
