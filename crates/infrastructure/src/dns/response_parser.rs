//! DNS reply decoding via `hickory-proto`.

use ferrous_blast_domain::{Answer, TransportError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Decodes reply bytes into the per-query `Answer` summary.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(reply: &[u8]) -> Result<Answer, TransportError> {
        let message = Message::from_vec(reply).map_err(|e| TransportError::Decode(e.to_string()))?;

        let answers = message.answers();
        let answer = Answer {
            answer_count: answers.len(),
            first_answer: answers.first().map(Self::render_record),
            rcode: Self::rcode_to_status(message.response_code()),
        };

        debug!(
            rcode = answer.rcode,
            answers = answer.answer_count,
            truncated = message.truncated(),
            "DNS reply parsed"
        );

        Ok(answer)
    }

    /// Zone-file style one-liner for log output. Only A records carry
    /// data this tool asks for; anything else is summarized by type.
    fn render_record(record: &Record) -> String {
        match record.data() {
            RData::A(a) => format!("{} {} IN A {}", record.name(), record.ttl(), a.0),
            _ => format!(
                "{} {} IN {}",
                record.name(),
                record.ttl(),
                record.record_type()
            ),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
