//! CLI entry point for the birth statistics submitter.
//!
//! Reads the four DESTATIS chart extracts, transforms them into yearly
//! records and submits each chart to its bucket, or exports the payloads.

use anyhow::Result;
use birth_stats_submitter::{
    buckets::BucketClient,
    charts::Chart,
    config::Config,
    output::write_payload,
    runner::{Outcome, build_payload, dry_run, run_all},
    transport::{BasicClient, auth::ApiKey},
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "birth_stats_submitter")]
#[command(about = "Submit German birth statistics to data buckets", long_about = None)]
struct Cli {
    /// Directory containing the chart CSV files (overrides DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// API base URL (overrides API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform the chart data and submit it to the configured buckets
    Submit {
        /// Chart number to process (1-4, repeatable; default: all)
        #[arg(short, long = "chart", value_parser = clap::value_parser!(u8).range(1..=4))]
        charts: Vec<u8>,

        /// Build and log the payloads without sending anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Write the payloads that would be submitted to JSON files
    Export {
        /// Chart number to export (1-4, repeatable; default: all)
        #[arg(short, long = "chart", value_parser = clap::value_parser!(u8).range(1..=4))]
        charts: Vec<u8>,

        /// Directory to write chart-N.json files to
        #[arg(short, long, default_value = "payloads")]
        output_dir: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/birth_stats_submitter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("birth_stats_submitter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::INFO));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    match cli.command {
        Commands::Submit { charts, dry_run: true } => {
            let charts = Chart::select(&charts)?;
            let outcomes = dry_run(&config, &charts)?;
            summarize(&outcomes);
        }
        Commands::Submit {
            charts,
            dry_run: false,
        } => {
            let charts = Chart::select(&charts)?;
            let client = ApiKey::x_api_key(
                BasicClient::with_timeouts(Duration::from_secs(30), Duration::from_secs(10))?,
                config.api_key()?,
            )?;
            let api = BucketClient::new(client, &config.api_base);

            let outcomes = run_all(&api, &config, &charts).await?;
            summarize(&outcomes);
        }
        Commands::Export { charts, output_dir } => {
            for chart in Chart::select(&charts)? {
                let records = build_payload(&config, chart)?;
                write_payload(&output_dir, chart, &records)?;
            }
        }
    }

    info!("Done!");
    Ok(())
}

/// Reads a filter from `var`, falling back to `default` when unset or invalid.
fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

fn summarize(outcomes: &[(Chart, Outcome)]) {
    let submitted = outcomes
        .iter()
        .filter(|(_, o)| matches!(o, Outcome::Submitted { .. }))
        .count();
    let skipped = outcomes.len() - submitted;
    info!(submitted, skipped, "Run summary");
}
