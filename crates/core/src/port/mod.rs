// Port Layer - Interfaces for external dependencies

pub mod time_provider; // For deterministic testing

// Re-exports
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
