pub mod message_builder;
pub mod names;
pub mod query_source;
pub mod response_parser;
pub mod transport;

pub use message_builder::MessageBuilder;
pub use query_source::QuerySource;
pub use response_parser::ResponseParser;
pub use transport::UdpTransport;
