//! Randomized query source behind the `QueryFactory` port.
//!
//! Every call derives its own `fastrand::Rng`, so concurrent workers
//! never contend on (or corrupt) shared generator state. Seeds combine
//! construction-time entropy with a process-wide counter; fixing the
//! base seed makes the whole sequence reproducible.

use crate::dns::names;
use ferrous_blast_application::ports::QueryFactory;
use ferrous_blast_domain::QueryMessage;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Weyl-style stride keeping consecutive derived seeds far apart.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct QuerySource {
    label_length: usize,
    base_seed: u64,
    calls: AtomicU64,
}

impl QuerySource {
    pub fn new(label_length: usize) -> Self {
        let base_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        info!(label_length, "Query source created");
        Self::with_base_seed(label_length, base_seed)
    }

    /// Fixed-seed constructor: call `n` of `build_query` always yields
    /// the same message for the same `base_seed`.
    pub fn with_base_seed(label_length: usize, base_seed: u64) -> Self {
        Self {
            label_length,
            base_seed,
            calls: AtomicU64::new(0),
        }
    }

    fn next_rng(&self) -> fastrand::Rng {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        fastrand::Rng::with_seed(self.base_seed ^ call.wrapping_mul(SEED_STRIDE))
    }
}

impl QueryFactory for QuerySource {
    fn build_query(&self) -> QueryMessage {
        let mut rng = self.next_rng();
        let id = rng.u16(..);
        let name = names::random_subject(&mut rng, self.label_length);
        QueryMessage::recursive(id, name)
    }
}
