use std::sync::Arc;

/// One unit of dispatch work: the resolver a single query is aimed at.
///
/// Jobs are created in bulk by the coordinator and consumed exactly once
/// by exactly one worker; there is no retry. `Arc<str>` keeps the bulk
/// enqueue cheap when every job carries the same target.
#[derive(Debug, Clone)]
pub struct Job {
    pub target: Arc<str>,
}

impl Job {
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self {
            target: target.into(),
        }
    }
}
