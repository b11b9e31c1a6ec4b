//! Concurrent fetch → histogram → rank → format pipeline.
//!
//! One dispatcher task feeds a bounded work queue, `workers` tasks drain it,
//! and a single writer task drains the bounded results queue into the sink.
//! All tasks share one `JoinSet`; the first fatal error aborts the set, so no
//! further URLs are dispatched and every resource is dropped before `run`
//! returns.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use crate::error::{PipelineError, TopKError};
use crate::models::{OutputOrdering, OutputRecord, PipelineConfig, RankedColors, UrlEvent};
use crate::ranking::{rank, Histogram};
use crate::services::{format_record, Fetcher, HttpClient, RecordSink, ReorderBuffer, UrlSource};

/// Input index paired with its URL
type WorkItem = (usize, UrlEvent);

/// Input index paired with its record, `None` for a soft failure
type WorkResult = (usize, Option<OutputRecord>);

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// URLs read from the source and queued
    pub dispatched: usize,
    /// Records written to the sink
    pub written: usize,
    /// URLs dropped after a soft failure
    pub skipped: usize,
}

#[derive(Default)]
struct Counters {
    dispatched: AtomicUsize,
    written: AtomicUsize,
    skipped: AtomicUsize,
}

impl Counters {
    fn summary(&self) -> RunSummary {
        RunSummary {
            dispatched: self.dispatched.load(Ordering::Relaxed),
            written: self.written.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

pub struct Pipeline {
    fetcher: Arc<Fetcher>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(client: Arc<dyn HttpClient>, config: PipelineConfig) -> Result<Self, PipelineError> {
        if config.top_colors == 0 {
            return Err(TopKError::ZeroCapacity.into());
        }

        let fetcher = Arc::new(Fetcher::new(client, config.transport_policy));
        Ok(Self { fetcher, config })
    }

    /// Process every URL of `source`, writing one record per loaded image to `sink`
    pub async fn run<S, K>(&self, source: S, sink: K) -> Result<RunSummary, PipelineError>
    where
        S: UrlSource + 'static,
        K: RecordSink + 'static,
    {
        let workers = self.config.workers.max(1);
        let queue_depth = self.config.queue_depth.max(1);

        tracing::info!(
            workers,
            queue_depth,
            ordering = ?self.config.ordering,
            transport_policy = ?self.config.transport_policy,
            "Starting pipeline"
        );

        let (work_tx, work_rx) = mpsc::channel::<WorkItem>(queue_depth);
        let (result_tx, result_rx) = mpsc::channel::<WorkResult>(queue_depth);
        let work_rx = Arc::new(Mutex::new(work_rx));
        let counters = Arc::new(Counters::default());

        let mut tasks = JoinSet::new();

        tasks.spawn(dispatch(source, work_tx, counters.clone()));

        for id in 0..workers {
            tasks.spawn(work(
                id,
                self.fetcher.clone(),
                self.config.top_colors,
                work_rx.clone(),
                result_tx.clone(),
                counters.clone(),
            ));
        }
        // The writer stops once every worker has dropped its sender
        drop(result_tx);

        tasks.spawn(write_records(sink, result_rx, self.config.ordering, counters.clone()));

        while let Some(joined) = tasks.join_next().await {
            let outcome = joined
                .map_err(|e| PipelineError::Worker(e.to_string()))
                .and_then(|result| result);

            if let Err(e) = outcome {
                tracing::error!(error = %e, "Aborting run");
                tasks.abort_all();
                while tasks.join_next().await.is_some() {}
                return Err(e);
            }
        }

        let summary = counters.summary();
        tracing::info!(
            dispatched = summary.dispatched,
            written = summary.written,
            skipped = summary.skipped,
            "Run complete"
        );
        Ok(summary)
    }
}

async fn dispatch<S: UrlSource>(
    mut source: S,
    queue: mpsc::Sender<WorkItem>,
    counters: Arc<Counters>,
) -> Result<(), PipelineError> {
    let mut index = 0;
    while let Some(event) = source.next_url().await? {
        // Workers gone means the run is already failing elsewhere
        if queue.send((index, event)).await.is_err() {
            break;
        }
        index += 1;
        counters.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    tracing::debug!(dispatched = index, "Input exhausted");
    Ok(())
}

async fn work(
    id: usize,
    fetcher: Arc<Fetcher>,
    top_colors: usize,
    queue: Arc<Mutex<mpsc::Receiver<WorkItem>>>,
    results: mpsc::Sender<WorkResult>,
    counters: Arc<Counters>,
) -> Result<(), PipelineError> {
    loop {
        let next = queue.lock().await.recv().await;
        let Some((index, event)) = next else {
            break;
        };

        let record = process(&fetcher, top_colors, event).await?;
        if record.is_none() {
            counters.skipped.fetch_add(1, Ordering::Relaxed);
        }

        // Writer gone: it reports its own error
        if results.send((index, record)).await.is_err() {
            break;
        }
    }

    tracing::debug!(worker = id, "Worker finished");
    Ok(())
}

/// Run one URL through every stage. `Ok(None)` is a soft failure.
async fn process(
    fetcher: &Fetcher,
    top_colors: usize,
    event: UrlEvent,
) -> Result<Option<OutputRecord>, PipelineError> {
    let fetched = fetcher.fetch(&event).await?;
    let Some(grid) = fetched.grid else {
        return Ok(None);
    };
    let url = fetched.url;

    let colors = tokio::task::spawn_blocking(move || {
        let histogram = Histogram::build(&grid);
        tracing::debug!(distinct = histogram.len(), pixels = histogram.total(), "Histogram built");
        rank(&histogram, top_colors)
    })
    .await
    .map_err(|e| PipelineError::Worker(format!("Ranking task failed: {e}")))??;

    tracing::debug!(url = %url, colors = ?colors, "Colors ranked");
    Ok(Some(format_record(&RankedColors { url, colors })))
}

async fn write_records<K: RecordSink>(
    mut sink: K,
    mut results: mpsc::Receiver<WorkResult>,
    ordering: OutputOrdering,
    counters: Arc<Counters>,
) -> Result<(), PipelineError> {
    let mut reorder = ReorderBuffer::new();

    while let Some((index, record)) = results.recv().await {
        let ready = match ordering {
            OutputOrdering::Completion => record.into_iter().collect(),
            OutputOrdering::Input => reorder.push(index, record),
        };

        for record in ready {
            sink.write(&record).await?;
            counters.written.fetch_add(1, Ordering::Relaxed);
        }
    }

    sink.finish().await
}
