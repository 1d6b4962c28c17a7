//! Error handling and processing statistics.
//!
//! This module provides:
//! - Session error definitions ([`FetchError`]) and categorization
//! - Initialization error definitions
//! - Thread-safe error statistics ([`ProcessingStats`])
//!
//! Fetch errors never propagate past the session that hit them; they are
//! converted into that session's result and counted here.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ConnectError);
        assert_eq!(stats.get_error_count(ErrorType::ConnectError), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::ConnectError);
        stats.increment_error(ErrorType::ReceiveError);
        stats.increment_error(ErrorType::ReceiveError);
        assert_eq!(stats.total_errors(), 3);
    }
}
