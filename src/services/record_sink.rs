use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::PipelineError;
use crate::models::OutputRecord;

/// Sequential consumer of output records. Only the writer task touches it.
#[async_trait]
pub trait RecordSink: Send {
    async fn write(&mut self, record: &OutputRecord) -> Result<(), PipelineError>;

    /// Flush anything still buffered; called once after the last record
    async fn finish(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

/// Output file, created (or truncated) on open and flushed after every record
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    pub async fn create(path: &Path) -> Result<Self, PipelineError> {
        let file = File::create(path)
            .await
            .map_err(|source| PipelineError::CreateOutput {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

#[async_trait]
impl RecordSink for FileSink {
    async fn write(&mut self, record: &OutputRecord) -> Result<(), PipelineError> {
        self.writer
            .write_all(record.as_bytes())
            .await
            .map_err(PipelineError::WriteOutput)?;
        self.writer.flush().await.map_err(PipelineError::WriteOutput)
    }

    async fn finish(&mut self) -> Result<(), PipelineError> {
        self.writer.flush().await.map_err(PipelineError::WriteOutput)?;
        self.writer
            .get_mut()
            .sync_all()
            .await
            .map_err(PipelineError::WriteOutput)
    }
}

/// Collects records in memory. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far, in write order
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write(&mut self, record: &OutputRecord) -> Result<(), PipelineError> {
        self.lines
            .lock()
            .map_err(|_| PipelineError::WriteOutput(std::io::Error::other("sink poisoned")))?
            .push(record.as_str().to_string());
        Ok(())
    }
}
