use thiserror::Error;

/// Failure classes for a single query round trip.
///
/// Every variant is per-query and non-fatal: the worker that hit it logs
/// the error and pulls the next job. Nothing here aborts a worker or the
/// pool.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("Invalid server address '{0}': {1}")]
    Address(String, String),

    #[error("UDP connect error: {0}")]
    Connect(String),

    #[error("Failed to encode DNS query: {0}")]
    Encode(String),

    #[error("Failed to send query: {0}")]
    Send(String),

    #[error("No reply from {server} within {timeout_ms}ms")]
    Timeout { server: String, timeout_ms: u64 },

    #[error("UDP read error: {0}")]
    Read(String),

    #[error("Failed to decode DNS reply: {0}")]
    Decode(String),
}

impl TransportError {
    /// Short name of the failure class, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Address(..) => "address",
            Self::Connect(_) => "connect",
            Self::Encode(_) => "encode",
            Self::Send(_) => "send",
            Self::Timeout { .. } => "timeout",
            Self::Read(_) => "read",
            Self::Decode(_) => "decode",
        }
    }
}
