//! HTTP transport
//!
//! The client only needs "GET this url, give me status and body". That
//! capability is the [`HttpTransport`] trait, so tests and embedders can swap
//! the network out. [`ReqwestTransport`] is the production implementation.
//!
//! No retries happen here: every failure goes straight back to the caller.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The exchange could not be completed.
#[derive(Debug, Clone, Error)]
#[error("{detail}")]
pub struct TransportError {
    pub detail: String,
    pub timeout: bool,
}

impl TransportError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            timeout: false,
        }
    }
}

/// Capability to perform one GET request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured connect and request timeouts.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::new(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client, keeping its own timeout settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            let timeout = e.is_timeout();
            // the url carries the password
            TransportError {
                detail: e.without_url().to_string(),
                timeout,
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse { status, body })
    }
}
