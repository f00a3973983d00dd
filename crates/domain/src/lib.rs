//! Ferrous Blast Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod job;
pub mod load;
pub mod query;

pub use answer::Answer;
pub use config::{CliOverrides, Config, ConfigError, LoadConfig, LoggingConfig, TargetConfig};
pub use errors::TransportError;
pub use job::Job;
pub use load::{LoadPlan, RunReport};
pub use query::QueryMessage;
