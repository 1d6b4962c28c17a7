//! DNS lookups, consumed by fetch sessions as an external collaborator.

mod resolution;

// Re-export public API
pub use resolution::resolve_host_addr;
