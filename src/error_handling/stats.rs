//! Processing statistics tracking.
//!
//! Thread-safe per-category error counters shared across all fetch sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe fetch error statistics tracker.
///
/// Tracks one atomic counter per [`ErrorType`], allowing concurrent updates
/// from all fetch sessions. All counters are initialized to zero on
/// creation, so incrementing never has to allocate.
///
/// # Thread Safety
///
/// This struct is shared across tasks via `Arc`; counters use relaxed
/// atomics since they are only read after the final join.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    /// Creates a tracker with every error type pre-seeded to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    ///
    /// All error types are seeded in the constructor; a missing entry
    /// indicates a bug in initialization, which is logged rather than
    /// panicking.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Returns the count for one error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Returns the total number of errors across all types.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
