use ferrous_blast_domain::QueryMessage;

/// Builds the query message a worker keeps for its whole lifetime.
///
/// Called once per worker at startup, concurrently from every worker
/// task. Implementations must derive any randomness independently per
/// call; sharing one generator state across callers is not allowed.
pub trait QueryFactory: Send + Sync {
    fn build_query(&self) -> QueryMessage;
}
