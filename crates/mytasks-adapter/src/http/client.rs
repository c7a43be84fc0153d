/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client plus shared send/decode helpers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::{Result, TaskClientError};

/// Base URL of the hosted task service
pub const DEFAULT_BASE_URL: &str = "https://task-manager-production-4aeb.up.railway.app";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task service
#[derive(Debug, Clone)]
pub struct TaskClient {
    http_client: Client,
    base_url: Url,
}

impl TaskClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.timeout.is_zero() {
            return Err(TaskClientError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    /// Create a client against a specific base URL, keeping the other settings
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.to_string(),
            ..config
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the base URL
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!(%method, %url, "building request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and hand back the raw response, whatever its status
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|err| {
            let err = TaskClientError::from(err);
            warn!(error = %err, "request failed before a response arrived");
            err
        })?;
        debug!(status = %response.status(), url = %response.url(), "response received");
        Ok(response)
    }

    /// Read the body of a response, turning non-2xx statuses into errors
    pub(crate) async fn read_body(&self, response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, "task service returned an error status");
            return Err(TaskClientError::http_error(status, body));
        }
        Ok(body)
    }

    /// Send a request and decode a successful JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let body = self.read_body(response).await?;
        decode(&body)
    }

    /// Send a request whose response may be `404`, mapping it to `None`
    pub(crate) async fn send_json_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = self.send(builder).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(url = %response.url(), "resource not found");
            return Ok(None);
        }
        let body = self.read_body(response).await?;
        decode(&body)
    }

    /// Send a write request; an empty 2xx body yields `None`
    pub(crate) async fn send_write<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>> {
        let response = self.send(builder).await?;
        let body = self.read_body(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        decode(&body).map(Some)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "could not decode response body");
        TaskClientError::Decode(err)
    })
}

/// Parse a base URL so that relative joins keep any path prefix
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskClientError::Config("base URL is empty".to_string()));
    }
    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
