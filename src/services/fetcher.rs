use std::sync::Arc;

use crate::error::{FetchFailure, PipelineError, TransportError};
use crate::models::{ImageFetchResult, PixelGrid, TransportPolicy, UrlEvent};
use crate::services::HttpClient;

/// Downloads and decodes images.
///
/// Non-2xx statuses, empty bodies and undecodable data are soft failures:
/// they are logged and reported as a result without a grid. Transport
/// failures follow the configured [`TransportPolicy`].
pub struct Fetcher {
    client: Arc<dyn HttpClient>,
    policy: TransportPolicy,
}

impl Fetcher {
    pub fn new(client: Arc<dyn HttpClient>, policy: TransportPolicy) -> Self {
        Self { client, policy }
    }

    pub async fn fetch(&self, event: &UrlEvent) -> Result<ImageFetchResult, PipelineError> {
        let url = event.url.as_str();
        tracing::info!(url = %url, "Downloading");

        match self.load(url).await? {
            Ok(grid) => {
                tracing::debug!(
                    url = %url,
                    width = grid.width(),
                    height = grid.height(),
                    "Image decoded"
                );
                Ok(ImageFetchResult::loaded(url, grid))
            }
            Err(failure) => {
                match &failure {
                    FetchFailure::EmptyBody => {
                        tracing::warn!(url = %url, "Empty response");
                    }
                    FetchFailure::Status(status) => {
                        tracing::warn!(url = %url, status = *status, "Unexpected response status");
                    }
                    other => {
                        tracing::warn!(url = %url, error = %other, "Skipping image");
                    }
                }
                Ok(ImageFetchResult::failed(url))
            }
        }
    }

    /// Outer error is fatal, inner error is a soft per-URL failure
    async fn load(&self, url: &str) -> Result<Result<PixelGrid, FetchFailure>, PipelineError> {
        let response = match self.client.get(url).await {
            Ok(response) => response,
            Err(TransportError::InvalidUrl(message)) => {
                return Ok(Err(FetchFailure::InvalidUrl(message)));
            }
            Err(TransportError::Io(message)) => {
                return match self.policy {
                    TransportPolicy::Soft => Ok(Err(FetchFailure::Transport(message))),
                    TransportPolicy::Fatal => {
                        tracing::error!(url = %url, error = %message, "Transport failure");
                        Err(PipelineError::Transport {
                            url: url.to_string(),
                            message,
                        })
                    }
                };
            }
        };

        if !response.is_success() {
            return Ok(Err(FetchFailure::Status(response.status)));
        }
        if response.body.is_empty() {
            return Ok(Err(FetchFailure::EmptyBody));
        }

        let body = response.body;
        tokio::task::spawn_blocking(move || decode_image(&body))
            .await
            .map_err(|e| PipelineError::Worker(format!("Decode task failed: {e}")))
    }
}

/// Decode any format the `image` crate recognises, dropping alpha
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, FetchFailure> {
    let image = image::load_from_memory(bytes).map_err(|e| FetchFailure::Decode(e.to_string()))?;
    Ok(PixelGrid::new(image.to_rgb8()))
}
