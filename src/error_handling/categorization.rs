//! Error categorization.
//!
//! Maps session errors onto statistics categories.

use super::stats::ProcessingStats;
use super::types::{ErrorType, FetchError};

/// Categorizes a [`FetchError`] into an [`ErrorType`].
///
/// The mapping is one-to-one; it exists so statistics can count by category
/// without holding on to the error values themselves.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Resolution { .. } => ErrorType::ResolutionError,
        FetchError::Connect { .. } => ErrorType::ConnectError,
        FetchError::Send(_) => ErrorType::SendError,
        FetchError::Receive(_) => ErrorType::ReceiveError,
        FetchError::ContentLengthParse(_) => ErrorType::ContentLengthParseError,
        FetchError::Timeout(_) => ErrorType::SessionTimeoutError,
        FetchError::Task(_) => ErrorType::FetchTaskError,
    }
}

/// Updates processing statistics based on a [`FetchError`].
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_error(categorize_fetch_error(error));
}
