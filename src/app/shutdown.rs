//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Shuts down the background progress-logging task gracefully.
///
/// Signals cancellation and awaits the task so its final output is flushed
/// before the run summary prints.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    logging_task: Option<tokio::task::JoinHandle<()>>,
) {
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        let _ = logging_task.await;
    }
}
