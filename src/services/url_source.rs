use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::error::PipelineError;
use crate::models::UrlEvent;

/// Lazy, finite sequence of URLs
#[async_trait]
pub trait UrlSource: Send {
    /// Next URL, `None` once the source is exhausted
    async fn next_url(&mut self) -> Result<Option<UrlEvent>, PipelineError>;
}

/// One URL per line. Blank lines are passed through as empty URLs.
pub struct LineSource<R> {
    lines: Lines<R>,
}

impl LineSource<BufReader<File>> {
    pub async fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path)
            .await
            .map_err(|source| PipelineError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: AsyncBufRead + Unpin> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> UrlSource for LineSource<R> {
    async fn next_url(&mut self) -> Result<Option<UrlEvent>, PipelineError> {
        match self.lines.next_line().await.map_err(PipelineError::ReadInput)? {
            Some(line) => {
                tracing::debug!(line = %line, "Input line");
                Ok(Some(UrlEvent::new(line)))
            }
            None => {
                tracing::debug!("No more input data");
                Ok(None)
            }
        }
    }
}

/// In-memory source, mostly useful for tests
pub struct VecSource {
    urls: std::vec::IntoIter<UrlEvent>,
}

impl VecSource {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<UrlEvent> = urls.into_iter().map(UrlEvent::new).collect();
        Self {
            urls: urls.into_iter(),
        }
    }
}

#[async_trait]
impl UrlSource for VecSource {
    async fn next_url(&mut self) -> Result<Option<UrlEvent>, PipelineError> {
        Ok(self.urls.next())
    }
}
