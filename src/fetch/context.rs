//! Shared context for fetch sessions.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ProcessingStats;

/// Read-only resources shared by every fetch session.
///
/// Each session owns its connection, scratch buffer, and accumulator
/// exclusively; only the resolver, the error counters, and the timeout
/// settings are shared, so no cross-session synchronization is needed.
#[derive(Clone)]
pub struct FetchContext {
    /// DNS resolver for hostname lookups.
    pub resolver: Arc<TokioAsyncResolver>,
    /// Error statistics tracker.
    pub error_stats: Arc<ProcessingStats>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Deadline covering one whole session: resolve + connect + send +
    /// receive.
    pub session_timeout: Duration,
}

impl FetchContext {
    /// Creates a new `FetchContext` with the given resources.
    pub fn new(
        resolver: Arc<TokioAsyncResolver>,
        error_stats: Arc<ProcessingStats>,
        connect_timeout: Duration,
        session_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            error_stats,
            connect_timeout,
            session_timeout,
        }
    }
}
