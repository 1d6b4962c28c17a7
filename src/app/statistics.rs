//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs the per-category error counts collected during the run.
///
/// Categories with a zero count are skipped; a run with no errors logs a
/// single line saying so.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total = error_stats.total_errors();
    if total == 0 {
        info!("No fetch errors encountered");
        return;
    }

    info!("Fetch error statistics ({} total):", total);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("  {}: {}", error_type.as_str(), count);
        }
    }
}
