//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (with plain or JSON formatting)
//! - DNS resolver
//! - Concurrency semaphore

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes a semaphore for controlling concurrency.
///
/// The semaphore limits how many fetch sessions run at once; each session
/// holds one permit from connect to completion.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent sessions allowed
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
