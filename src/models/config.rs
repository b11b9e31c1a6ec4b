use std::time::Duration;

/// Number of colors reported per image
pub const DEFAULT_TOP_COLORS: usize = 3;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default size of the pooled connection set
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 100;

/// Order in which records reach the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputOrdering {
    /// Records are written as soon as they complete
    #[default]
    Completion,
    /// Records are held back until every earlier input line has been resolved
    Input,
}

/// How transport-level failures (connect, DNS, timeout) are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportPolicy {
    /// Abort the whole run
    #[default]
    Fatal,
    /// Log and skip the URL like any other soft failure
    Soft,
}

/// Run configuration, assembled from CLI flags
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of concurrent workers
    pub workers: usize,

    /// Capacity of the work and results queues
    pub queue_depth: usize,

    /// Colors kept per image
    pub top_colors: usize,

    pub ordering: OutputOrdering,

    pub transport_policy: TransportPolicy,

    /// Per-request timeout (connect + body)
    pub request_timeout: Duration,

    /// Idle connections kept per host by the HTTP client
    pub max_idle_connections: usize,
}

impl PipelineConfig {
    /// Set the worker count, keeping the queue depth proportional
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self.queue_depth = self.workers * 2;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            workers,
            queue_depth: workers * 2,
            top_colors: DEFAULT_TOP_COLORS,
            ordering: OutputOrdering::default(),
            transport_policy: TransportPolicy::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
        }
    }
}
