// Sisfila Core - Domain Logic & Ports
// NO infrastructure dependencies (persistence and UI live outside)

pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
