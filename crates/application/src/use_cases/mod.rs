pub mod run_load;

// Re-export use cases
pub use run_load::RunLoadUseCase;
