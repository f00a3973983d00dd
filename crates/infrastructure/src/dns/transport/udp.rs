//! UDP transport for load queries (RFC 1035 §4.2.1).
//!
//! One ephemeral socket per query, connected to the target for the
//! duration of the round trip. No retry and no TCP fallback; a truncated
//! reply still decodes and is summarized as-is.

use crate::dns::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use ferrous_blast_application::ports::QueryTransport;
use ferrous_blast_domain::{Answer, QueryMessage, TransportError};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, info};

/// Maximum UDP DNS response size accepted without EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one round trip per call.
pub struct UdpTransport {
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        info!(timeout_ms = timeout.as_millis() as u64, "UDP transport created");
        Self { timeout }
    }
}

#[async_trait]
impl QueryTransport for UdpTransport {
    async fn query(&self, message: &QueryMessage, target: &str) -> Result<Answer, TransportError> {
        let server_addr: SocketAddr = target
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                TransportError::Address(target.to_string(), e.to_string())
            })?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        socket
            .connect(server_addr)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        let query_bytes = MessageBuilder::encode(message)?;

        let bytes_sent = socket
            .send(&query_bytes)
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        debug!(
            server = %server_addr,
            bytes_sent = bytes_sent,
            id = message.id,
            "UDP query sent"
        );

        // Only the wait for the reply runs under the deadline; sends
        // never block long enough on UDP to need one.
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| TransportError::Timeout {
                server: server_addr.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            })?
            .map_err(|e| TransportError::Read(e.to_string()))?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server_addr,
            bytes_received = bytes_received,
            "UDP reply received"
        );

        ResponseParser::parse(&recv_buf)
    }
}
