use clap::Parser;
use ferrous_blast_application::RunLoadUseCase;
use ferrous_blast_domain::{CliOverrides, LoadPlan};
use ferrous_blast_infrastructure::{QuerySource, UdpTransport};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-blast")]
#[command(version)]
#[command(about = "Ferrous Blast - DNS load generator firing randomized A queries")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Resolver under load (host:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Total queries to issue
    #[arg(short = 'j', long)]
    jobs: Option<u64>,

    /// Worker pool size
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Random label length of generated subjects
    #[arg(long)]
    label_length: Option<usize>,

    /// Job queue bound
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Per-query receive timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        jobs: cli.jobs,
        workers: cli.workers,
        queue_capacity: cli.queue_capacity,
        label_length: cli.label_length,
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Ferrous Blast v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_effective_config(&config, cli.config.as_deref());

    let transport = Arc::new(UdpTransport::new(Duration::from_millis(
        config.load.query_timeout_ms,
    )));
    let queries = Arc::new(QuerySource::new(config.load.label_length));
    let run_load = RunLoadUseCase::new(transport, queries);

    let plan = LoadPlan::from_config(&config);
    let report = run_load.execute(&plan).await;

    // Per-query failures were already reported; the run itself succeeded.
    info!(
        attempted = report.attempted,
        succeeded = report.succeeded,
        failed = report.failed,
        elapsed_ms = report.elapsed.as_millis() as u64,
        qps = %format!("{:.1}", report.queries_per_second()),
        "Run finished"
    );

    Ok(())
}
