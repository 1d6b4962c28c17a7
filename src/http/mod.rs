//! Wire-level HTTP: request construction and incremental response assembly.
//!
//! This is deliberately not an HTTP client. The request side emits one
//! fixed-shape GET; the response side understands exactly one framing,
//! a header block terminated by a blank line followed by `Content-Length`
//! bytes of body. Chunked encoding, redirects, and TLS are out of scope.

mod request;
mod response;

// Re-export public API
pub use request::build_request;
pub use response::{AssemblerState, ResponseAssembler};
