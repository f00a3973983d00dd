mod query_factory;
mod query_transport;

pub use query_factory::QueryFactory;
pub use query_transport::QueryTransport;

// Re-export for convenience
pub use ferrous_blast_domain::QueryMessage;
