use async_trait::async_trait;
use ferrous_blast_domain::{Answer, QueryMessage, TransportError};

/// One best-effort query round trip against a resolver.
///
/// Implementations own their socket for the duration of the call and do
/// not retry. Every failure is reported to the caller, which decides
/// whether it is fatal for the run (it never is during dispatch).
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn query(&self, message: &QueryMessage, target: &str)
        -> Result<Answer, TransportError>;
}
