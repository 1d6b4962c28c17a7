//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes an input line into a fetchable URL.
///
/// Adds an `http://` prefix if the scheme is missing, then validates that
/// the URL parses and has a host. Only `http` is accepted: `https` needs a
/// TLS handshake this crate deliberately does not speak, so those URLs are
/// skipped with a warning rather than fetched blind. Lines longer than
/// `MAX_URL_LENGTH` are rejected.
///
/// # Returns
///
/// `Some(url)` if the URL should be fetched, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<Url> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            &url[..50.min(url.len())]
        );
        return None;
    }

    let normalized = if !url.contains("://") {
        format!("http://{url}")
    } else {
        url.to_string()
    };

    let parsed = match Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            return None;
        }
    };

    match parsed.scheme() {
        "http" => {}
        "https" => {
            warn!("Skipping https URL (TLS not supported): {url}");
            return None;
        }
        _ => {
            warn!("Skipping unsupported scheme for URL: {url}");
            return None;
        }
    }

    if parsed.host_str().is_none() {
        warn!("Skipping URL without a host: {url}");
        return None;
    }

    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;

    #[test]
    fn test_adds_http_prefix() {
        let result = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(result.as_str(), "http://example.com/");
    }

    #[test]
    fn test_preserves_http() {
        let result = validate_and_normalize_url("http://example.com/page.html").unwrap();
        assert_eq!(result.as_str(), "http://example.com/page.html");
    }

    #[test]
    fn test_preserves_port_and_query() {
        let result = validate_and_normalize_url("example.com:8080/search?q=rust").unwrap();
        assert_eq!(result.host_str(), Some("example.com"));
        assert_eq!(result.port(), Some(8080));
        assert_eq!(result.query(), Some("q=rust"));
    }

    #[test]
    fn test_rejects_https() {
        assert!(validate_and_normalize_url("https://example.com").is_none());
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        assert!(validate_and_normalize_url("ftp://example.com").is_none());
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(validate_and_normalize_url("not a url at all!!!").is_none());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_and_normalize_url("").is_none());
    }

    #[test]
    fn test_rejects_too_long_url() {
        let long_url = format!("http://example.com/{}", "a".repeat(2100));
        assert!(validate_and_normalize_url(&long_url).is_none());
    }

    #[test]
    fn test_accepts_ip_literal_with_port() {
        let result = validate_and_normalize_url("127.0.0.1:8080").unwrap();
        assert_eq!(result.host_str(), Some("127.0.0.1"));
        assert_eq!(result.port(), Some(8080));
    }

    #[test]
    fn test_accepts_ipv6_literal() {
        let result = validate_and_normalize_url("http://[::1]:8080/").unwrap();
        assert_eq!(result.host_str(), Some("[::1]"));
    }
}
