//! Shared HTTP client with lazy global initialization.

use std::sync::LazyLock;

use reqwest::{RequestBuilder, Response};
use scheduler_core::submit::IdempotencyKey;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Header carrying the client-generated key for write requests.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Process-wide client, configured from the environment on first use.
static CLIENT: LazyLock<SchedulerClient> =
    LazyLock::new(|| SchedulerClient::new(ApiConfig::from_env()));

/// The shared client used by the UI.
pub fn client() -> &'static SchedulerClient {
    &CLIENT
}

/// Typed access to the scheduling API.
#[derive(Debug, Clone)]
pub struct SchedulerClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SchedulerClient {
    pub fn new(config: ApiConfig) -> Self {
        tracing::info!("Using scheduling API at {}", config.base_url);
        Self {
            http: build_http(&config),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch(self.http.get(self.config.url(path))).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.fetch(self.http.get(self.config.url(path)).query(query)).await
    }

    /// POST or PUT a JSON body, tagged with an idempotency key.
    pub(crate) fn write<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
        key: IdempotencyKey,
    ) -> RequestBuilder {
        self.http
            .request(method, self.config.url(path))
            .header(IDEMPOTENCY_HEADER, key.to_string())
            .json(body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.config.url(path))).await?;
        Ok(())
    }

    /// Send and decode a JSON response.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and check the status, discarding nothing.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "API request failed: {}", body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ApiConfig) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default HTTP client: {}", e);
        reqwest::Client::new()
    })
}

#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}
