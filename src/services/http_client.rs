use async_trait::async_trait;
use std::time::Duration;

use crate::error::{PipelineError, TransportError};

/// Raw HTTP response: status code and full body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network capability used by the fetcher.
///
/// Implementations own connection pooling; one instance is shared by all
/// workers of a run and dropped when the run ends.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Pooled HTTP client backed by reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(timeout: Duration, max_idle_connections: usize) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(max_idle_connections)
            .build()
            .map_err(|e| PipelineError::Client(e.to_string()))?;

        tracing::debug!(
            timeout_secs = timeout.as_secs(),
            max_idle_connections,
            "HTTP client created"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| classify(&e))?;

        let status = response.status().as_u16();
        // Error bodies are never decoded, so skip reading them
        if !(200..300).contains(&status) {
            return Ok(HttpResponse::new(status, Vec::new()));
        }

        let body = response.bytes().await.map_err(|e| classify(&e))?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn classify(error: &reqwest::Error) -> TransportError {
    // Unsupported schemes and malformed hosts surface as builder errors
    if error.is_builder() {
        TransportError::InvalidUrl(error.to_string())
    } else {
        TransportError::Io(error.to_string())
    }
}
