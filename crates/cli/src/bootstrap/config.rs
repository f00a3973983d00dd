use ferrous_blast_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Reports the effective plan. Call after `init_logging`; lines emitted
/// before the subscriber is installed are dropped.
pub fn log_effective_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        server = %config.target.server,
        jobs = config.load.jobs,
        workers = config.load.workers,
        queue_capacity = config.load.queue_capacity,
        label_length = config.load.label_length,
        timeout_ms = config.load.query_timeout_ms,
        "Configuration loaded"
    );
}
