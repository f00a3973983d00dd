use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::load::LoadConfig;
use super::logging::LoggingConfig;
use super::target::TargetConfig;

/// Main configuration structure for Ferrous Blast
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver under load
    #[serde(default)]
    pub target: TargetConfig,

    /// Queue, pool and per-query knobs
    #[serde(default)]
    pub load: LoadConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-blast.toml in current directory
    /// 3. /etc/ferrous-blast/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ferrous-blast.toml").exists() {
            Self::from_file("ferrous-blast.toml")?
        } else if std::path::Path::new("/etc/ferrous-blast/config.toml").exists() {
            Self::from_file("/etc/ferrous-blast/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.target.server = server;
        }
        if let Some(jobs) = overrides.jobs {
            self.load.jobs = jobs;
        }
        if let Some(workers) = overrides.workers {
            self.load.workers = workers;
        }
        if let Some(capacity) = overrides.queue_capacity {
            self.load.queue_capacity = capacity;
        }
        if let Some(length) = overrides.label_length {
            self.load.label_length = length;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.load.query_timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// A malformed target address is not rejected here; the transport
    /// reports it per query.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.server.is_empty() {
            return Err(ConfigError::Validation(
                "Target server cannot be empty".to_string(),
            ));
        }

        if self.load.workers == 0 {
            return Err(ConfigError::Validation(
                "Worker count must be at least 1".to_string(),
            ));
        }

        if self.load.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Queue capacity must be at least 1".to_string(),
            ));
        }

        if self.load.label_length == 0 {
            return Err(ConfigError::Validation(
                "Label length must be at least 1".to_string(),
            ));
        }

        if self.load.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub jobs: Option<u64>,
    pub workers: Option<usize>,
    pub queue_capacity: Option<usize>,
    pub label_length: Option<usize>,
    pub query_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
