//! Progress logging utilities.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::info;

/// Logs a progress line for the running crawl.
///
/// # Arguments
///
/// * `start_time` - When the crawl started
/// * `completed_urls` - Atomic counter of successfully fetched URLs
/// * `failed_urls` - Atomic counter of failed URLs
/// * `total_urls` - Total number of accepted targets
pub fn log_progress(
    start_time: std::time::Instant,
    completed_urls: &Arc<AtomicUsize>,
    failed_urls: &Arc<AtomicUsize>,
    total_urls: &Arc<AtomicUsize>,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed_urls.load(Ordering::SeqCst);
    let failed = failed_urls.load(Ordering::SeqCst);
    let total = total_urls.load(Ordering::SeqCst);
    let done = completed + failed;
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Fetched {}/{} URLs ({} failed) in {:.2} seconds (~{:.2} URLs/sec)",
        done, total, failed, elapsed_secs, rate
    );
}
