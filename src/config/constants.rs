//! Configuration constants.
//!
//! This module defines the operational constants used throughout the crate:
//! ports, buffer sizes, timeouts, and input limits.

/// Conventional HTTP port, used when a URL carries no explicit port.
pub const HTTP_PORT: u16 = 80;

/// Size of the per-session receive scratch buffer in bytes.
///
/// Each session reads into a fixed buffer of this size and copies the
/// received chunk into its growable accumulator before the next read
/// overwrites it. The buffer is never shared across sessions.
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

/// Interval between progress log lines in seconds.
pub const LOGGING_INTERVAL: u64 = 5;

/// Default maximum number of concurrently running fetch sessions
/// (semaphore limit).
pub const DEFAULT_MAX_CONCURRENCY: usize = 30;

/// Default per-session deadline in seconds.
///
/// Covers the whole session: resolve + connect + send + receive. On expiry
/// only that session is aborted and reported as timed out.
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 30;

// Network operation timeouts
/// DNS query timeout in seconds.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum URL length accepted from the input list.
///
/// Matches common browser and server limits; longer lines are skipped with
/// a warning.
pub const MAX_URL_LENGTH: usize = 2048;
