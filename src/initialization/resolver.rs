//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the default resolver configuration with short timeouts and a reduced
/// attempt count so sessions fail fast on slow or unresponsive DNS servers
/// instead of eating into their own deadlines.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// all fetch sessions.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver cannot
/// be constructed (the default configuration should not fail).
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2;
    // Input URLs carry full hostnames; never append search domains.
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
