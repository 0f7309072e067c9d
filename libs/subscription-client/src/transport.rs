//! HTTP transport seam
//!
//! `SubscriptionClient` never talks to reqwest directly. It hands a fully built
//! request to an [`HttpTransport`], which performs it and reports either the
//! response or a failure. [`ReqwestTransport`] is the production implementation.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Request headers, name to value
pub type Headers = HashMap<String, String>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// Response as returned by the server, left uninterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, if it is JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Performs POST and DELETE requests on behalf of the client
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` as JSON to `url`
    async fn post(&self, url: &str, body: &Value, headers: Headers) -> Result<TransportResponse>;

    /// DELETE `url` without a body
    async fn delete(&self, url: &str, headers: Headers) -> Result<TransportResponse>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client })
    }

    async fn execute(&self, req: RequestBuilder) -> Result<TransportResponse> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(extract_api_error(response).await);
        }

        let body = response.text().await?;
        debug!("Received {} ({} bytes)", status, body.len());

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, url: &str, body: &Value, headers: Headers) -> Result<TransportResponse> {
        let req = with_headers(self.client.post(url).json(body), headers);
        self.execute(req).await
    }

    async fn delete(&self, url: &str, headers: Headers) -> Result<TransportResponse> {
        let req = with_headers(self.client.delete(url), headers);
        self.execute(req).await
    }
}

/// Turn a failed response into a status error, keeping whatever body it had
pub async fn extract_api_error(response: reqwest::Response) -> TransportError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    debug!("Received {} ({} bytes)", status, body.len());
    TransportError::Status { status, body }
}

/// Add headers from a HashMap to a request builder
pub fn with_headers(req: RequestBuilder, headers: Headers) -> RequestBuilder {
    headers
        .into_iter()
        .fold(req, |r, (k, v)| r.header(k, v))
}
