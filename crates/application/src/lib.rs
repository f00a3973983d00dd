//! Ferrous Blast Application Layer
//!
//! Use cases and ports. The load run is orchestrated here against
//! abstract transport and query-source ports; wiring the concrete
//! adapters in is the composition root's job.

pub mod ports;
pub mod use_cases;

// Re-export the main entry point
pub use use_cases::RunLoadUseCase;
