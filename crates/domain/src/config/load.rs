use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoadConfig {
    /// Total queries to issue over the whole run.
    #[serde(default = "default_jobs")]
    pub jobs: u64,

    /// Fixed worker pool size.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Bound of the job queue between the coordinator and the workers.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Length of the random subdomain label each worker queries for.
    #[serde(default = "default_label_length")]
    pub label_length: usize,

    /// Per-query receive deadline, measured from the send instant.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            workers: default_workers(),
            queue_capacity: default_queue_capacity(),
            label_length: default_label_length(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_jobs() -> u64 {
    4096
}

fn default_workers() -> usize {
    16
}

fn default_queue_capacity() -> usize {
    256
}

fn default_label_length() -> usize {
    5
}

fn default_query_timeout_ms() -> u64 {
    3000
}
