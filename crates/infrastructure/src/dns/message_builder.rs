//! DNS query serialization via `hickory-proto`.

use ferrous_blast_domain::{QueryMessage, TransportError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize a `QueryMessage` to wire bytes: header carrying the
    /// message's id and RD flag, one question of type A, class IN.
    pub fn encode(message: &QueryMessage) -> Result<Vec<u8>, TransportError> {
        let name = Name::from_str(&message.name).map_err(|e| {
            TransportError::Encode(format!("invalid subject '{}': {}", message.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordType::A);
        question.set_query_class(DNSClass::IN);

        let mut wire = Message::new(message.id, MessageType::Query, OpCode::Query);
        wire.set_recursion_desired(message.recursion_desired);
        wire.add_query(question);

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        wire.emit(&mut encoder)
            .map_err(|e| TransportError::Encode(format!("failed to serialize query: {}", e)))?;

        Ok(buf)
    }
}
