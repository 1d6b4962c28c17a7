//! Configuration: CLI options, library config, and operational constants.

pub mod constants;
mod types;

// Re-export public API
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
