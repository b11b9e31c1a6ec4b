use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure: aborts the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to open input {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Failed to create output {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Worker task failed: {0}")]
    Worker(String),

    #[error("Ranking error: {0}")]
    Ranking(#[from] TopKError),
}

/// Error reported by an [`HttpClient`](crate::services::HttpClient) implementation
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Io(String),
}

/// Soft failure for a single URL: logged and skipped, never fatal.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("Unexpected response status {0}")]
    Status(u16),

    #[error("Empty response")]
    EmptyBody,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopKError {
    #[error("Top-K capacity must be at least 1")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_read_input() {
        let error = PipelineError::ReadInput(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        ));
        assert_eq!(
            error.to_string(),
            "Failed to read input: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_pipeline_error_open_input() {
        let error = PipelineError::OpenInput {
            path: PathBuf::from("/missing/urls.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to open input /missing/urls.txt: not found"
        );
    }

    #[test]
    fn test_pipeline_error_transport() {
        let error = PipelineError::Transport {
            url: "http://test.url".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transport error for http://test.url: connection refused"
        );
    }

    #[test]
    fn test_fetch_failure_status() {
        let error = FetchFailure::Status(500);
        assert_eq!(error.to_string(), "Unexpected response status 500");
    }

    #[test]
    fn test_fetch_failure_empty_body() {
        assert_eq!(FetchFailure::EmptyBody.to_string(), "Empty response");
    }

    #[test]
    fn test_transport_error_invalid_url() {
        let error = TransportError::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(error.to_string(), "Invalid URL: relative URL without a base");
    }

    #[test]
    fn test_pipeline_error_from_top_k_error() {
        let error: PipelineError = TopKError::ZeroCapacity.into();
        match error {
            PipelineError::Ranking(_) => {}
            _ => panic!("Expected Ranking variant"),
        }
    }

    #[test]
    fn test_top_k_error_zero_capacity() {
        assert_eq!(
            TopKError::ZeroCapacity.to_string(),
            "Top-K capacity must be at least 1"
        );
    }
}
