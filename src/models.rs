//! Core data types shared between fetch sessions and the orchestrator.

use url::Url;

use crate::error_handling::FetchError;

/// A single page to fetch, created by the orchestrator from the input list.
///
/// `sequence_id` is the target's position in the input. It is used only for
/// logging and for ordering the final results; it has no effect on fetch
/// behavior.
#[derive(Debug, Clone)]
pub struct FetchTarget {
    /// The validated, normalized URL to fetch.
    pub url: Url,
    /// Position of the URL in the input list.
    pub sequence_id: usize,
}

/// Terminal outcome of one fetch session.
///
/// Exactly one `FetchResult` is produced per accepted input URL, on both the
/// success and failure paths. A failed fetch never carries a partial body.
#[derive(Debug)]
pub struct FetchResult {
    /// Position of the URL in the input list.
    pub sequence_id: usize,
    /// The URL as it was fetched (after normalization).
    pub url: String,
    /// Whether the response was assembled to completion.
    pub success: bool,
    /// The response body, present only on success.
    pub body: Option<Vec<u8>>,
    /// The error that ended the session, present only on failure.
    pub error: Option<FetchError>,
}

impl FetchResult {
    /// Builds the success result for a target whose response completed.
    pub fn completed(target: &FetchTarget, body: Vec<u8>) -> Self {
        Self {
            sequence_id: target.sequence_id,
            url: target.url.to_string(),
            success: true,
            body: Some(body),
            error: None,
        }
    }

    /// Builds the failure result for a target whose session ended in `error`.
    pub fn failed(target: &FetchTarget, error: FetchError) -> Self {
        Self {
            sequence_id: target.sequence_id,
            url: target.url.to_string(),
            success: false,
            body: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(url: &str, sequence_id: usize) -> FetchTarget {
        FetchTarget {
            url: Url::parse(url).unwrap(),
            sequence_id,
        }
    }

    #[test]
    fn test_completed_result_carries_body() {
        let result = FetchResult::completed(&target("http://example.com/", 3), b"hello".to_vec());
        assert_eq!(result.sequence_id, 3);
        assert!(result.success);
        assert_eq!(result.body.as_deref(), Some(b"hello".as_ref()));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_failed_result_carries_no_body() {
        let error = FetchError::Receive("connection closed".to_string());
        let result = FetchResult::failed(&target("http://example.com/", 0), error);
        assert!(!result.success);
        assert!(result.body.is_none());
        assert!(result.error.is_some());
    }
}
