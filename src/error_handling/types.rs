//! Error type definitions.
//!
//! This module defines the session-level fetch errors, the initialization
//! errors, and the `ErrorType` categories used for statistics.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configurations that can fail
    DnsResolverError(String),
}

/// Errors that can end a fetch session.
///
/// Each variant is local to exactly one session: it becomes that session's
/// [`FetchResult`](crate::FetchResult) rather than propagating as a
/// process-wide fault, so a failure for one URL never affects the others.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The host could not be resolved to an address.
    #[error("DNS resolution error for {host}: {message}")]
    Resolution {
        /// The host that failed to resolve.
        host: String,
        /// Resolver failure detail.
        message: String,
    },

    /// The TCP connection could not be established.
    #[error("TCP connect error for {addr}: {source}")]
    Connect {
        /// The address the session tried to connect to.
        addr: SocketAddr,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The request bytes could not be written in full.
    #[error("send error: {0}")]
    Send(#[source] io::Error),

    /// A read failed, or the stream closed before the response was complete.
    ///
    /// An unexpected close while headers or body bytes are still outstanding
    /// is always this error, never a successful result.
    #[error("receive error: {0}")]
    Receive(String),

    /// The `Content-Length` header value is not a valid non-negative
    /// base-10 integer.
    #[error("invalid Content-Length value: {0:?}")]
    ContentLengthParse(String),

    /// The per-session deadline expired before the response completed.
    #[error("session timed out after {0:?}")]
    Timeout(Duration),

    /// The worker task running the session died without producing a result.
    #[error("fetch task failed: {0}")]
    Task(String),
}

/// Categories of fetch errors, used for end-of-run statistics.
///
/// Mirrors the [`FetchError`] variants one-to-one so counters can be
/// pre-seeded by iterating the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum ErrorType {
    /// Host could not be resolved.
    ResolutionError,
    /// TCP connect failed.
    ConnectError,
    /// Request could not be written in full.
    SendError,
    /// Read failed or the stream closed early.
    ReceiveError,
    /// `Content-Length` value did not parse.
    ContentLengthParseError,
    /// Per-session deadline expired.
    SessionTimeoutError,
    /// Worker task died without a result.
    FetchTaskError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ResolutionError => "DNS resolution error",
            ErrorType::ConnectError => "TCP connect error",
            ErrorType::SendError => "Send error",
            ErrorType::ReceiveError => "Receive error",
            ErrorType::ContentLengthParseError => "Content-Length parse error",
            ErrorType::SessionTimeoutError => "Session timeout",
            ErrorType::FetchTaskError => "Fetch task error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::ResolutionError.as_str(), "DNS resolution error");
        assert_eq!(ErrorType::ReceiveError.as_str(), "Receive error");
        assert_eq!(ErrorType::SessionTimeoutError.as_str(), "Session timeout");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            assert!(
                !error_type.as_str().is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_fetch_error_display() {
        let error = FetchError::Resolution {
            host: "example.com".to_string(),
            message: "no addresses found".to_string(),
        };
        assert!(error.to_string().contains("example.com"));

        let error = FetchError::ContentLengthParse("abc".to_string());
        assert!(error.to_string().contains("abc"));
    }
}
