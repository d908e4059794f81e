//! Runs the store round-trip benchmark against a local Redis-compatible server.
//!
//! Report lines go to stdout. Logs go to stderr, filtered by `RUST_LOG`.

use cachebench::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(summary) => {
            tracing::info!("completed {} formats", summary.results.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("benchmark aborted: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<BenchSummary, BenchError> {
    let config = BenchConfig::default();
    let client = connect(&config).await?;
    tracing::info!(
        "benchmarking {} records per format against {}",
        config.record_count,
        client.server_addr()
    );

    let mut ctx = BenchContext::new(config, client, Reporter::new(std::io::stdout().lock()));
    run_benchmarks(&mut ctx).await
}
