use std::time::Duration;

use crate::config::Config;

/// Everything the dispatcher needs for one run.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    /// Resolver under load, host:port. Every job carries this same target.
    pub target: String,
    /// Total queries to issue.
    pub jobs: u64,
    /// Fixed worker pool size.
    pub workers: usize,
    /// Bound of the job queue, chosen independently of jobs/workers.
    pub queue_capacity: usize,
}

impl LoadPlan {
    pub fn from_config(config: &Config) -> Self {
        Self {
            target: config.target.server.clone(),
            jobs: config.load.jobs,
            workers: config.load.workers,
            queue_capacity: config.load.queue_capacity,
        }
    }
}

/// Outcome counters for a completed run.
///
/// attempted == succeeded + failed always holds; the coordinator only
/// returns once every enqueued job has been pulled and attempted.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn queries_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.attempted as f64 / secs
        }
    }
}
