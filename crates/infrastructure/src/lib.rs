//! Ferrous Blast Infrastructure Layer
//!
//! Concrete adapters behind the application ports: the hickory-proto
//! wire codec, the UDP transport, and the randomized query source.

pub mod dns;

pub use dns::{MessageBuilder, QuerySource, ResponseParser, UdpTransport};
