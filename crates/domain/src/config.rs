//! Configuration for Ferrous Blast, organized by concern:
//! - `root`: file loading, CLI overrides, validation
//! - `target`: the resolver under load
//! - `load`: workload shape (jobs, workers, queue, labels, timeout)
//! - `logging`: log level
//! - `errors`: configuration errors

mod errors;
mod load;
mod logging;
mod root;
mod target;

pub use errors::ConfigError;
pub use load::LoadConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use target::TargetConfig;
