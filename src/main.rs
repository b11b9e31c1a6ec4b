use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topcolors::models::{OutputOrdering, PipelineConfig, TransportPolicy, DEFAULT_TIMEOUT_SECS};
use topcolors::services::{FileSink, LineSource, Pipeline, ReqwestClient};

#[derive(Parser)]
#[command(name = "topcolors")]
#[command(about = "Write the three most frequent colors of every image listed in INPUT to OUTPUT")]
struct Cli {
    /// Text file with one image URL per line
    input: PathBuf,

    /// CSV file to write, one `url,RRGGBB,RRGGBB,RRGGBB` line per image
    output: PathBuf,

    /// Number of concurrent workers (default: available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Write records in input order instead of completion order
    #[arg(long)]
    ordered: bool,

    /// Skip URLs with connection/DNS/timeout failures instead of aborting
    #[arg(long)]
    soft_transport_errors: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if self.ordered {
            config.ordering = OutputOrdering::Input;
        }
        if self.soft_transport_errors {
            config.transport_policy = TransportPolicy::Soft;
        }
        config.request_timeout = Duration::from_secs(self.timeout_secs);
        config
    }
}

/// `None` when the arguments do not name an input and an output file
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(cli) = parse_args(std::env::args_os()) else {
        println!("Run again with input and output file as arguments.");
        println!("Usage: topcolors <INPUT> <OUTPUT>");
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "topcolors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.pipeline_config();

    let client = Arc::new(ReqwestClient::new(
        config.request_timeout,
        config.max_idle_connections,
    )?);
    let pipeline = Pipeline::new(client, config)?;

    let source = LineSource::open(&cli.input).await?;
    let sink = FileSink::create(&cli.output).await?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        "Processing"
    );

    pipeline.run(source, sink).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_argument_count_shows_usage() {
        assert!(parse_args(["topcolors"]).is_none());
        assert!(parse_args(["topcolors", "urls.txt"]).is_none());
        assert!(parse_args(["topcolors", "urls.txt", "out.csv", "extra"]).is_none());
    }

    #[test]
    fn test_unknown_flag_shows_usage() {
        assert!(parse_args(["topcolors", "urls.txt", "out.csv", "--colors", "5"]).is_none());
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(["topcolors", "urls.txt", "out.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("urls.txt"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));

        let config = cli.pipeline_config();
        let defaults = PipelineConfig::default();
        assert_eq!(config.workers, defaults.workers);
        assert_eq!(config.ordering, OutputOrdering::Completion);
        assert_eq!(config.transport_policy, TransportPolicy::Fatal);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = parse_args([
            "topcolors",
            "urls.txt",
            "out.csv",
            "-w",
            "3",
            "--ordered",
            "--soft-transport-errors",
            "--timeout-secs",
            "7",
        ])
        .unwrap();

        let config = cli.pipeline_config();
        assert_eq!(config.workers, 3);
        assert_eq!(config.queue_depth, 6);
        assert_eq!(config.ordering, OutputOrdering::Input);
        assert_eq!(config.transport_policy, TransportPolicy::Soft);
        assert_eq!(config.request_timeout, Duration::from_secs(7));
    }
}
