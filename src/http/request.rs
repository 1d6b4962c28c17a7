//! Minimal HTTP/1.1 request construction.

/// Builds the literal bytes of a body-less GET request for `path` on `host`.
///
/// The request is the request line, a `Host` header carrying the display
/// host name, a `Content-Length: 0` header, and the blank-line terminator.
/// The path is emitted as-is; URL validation happens before a session gets
/// this far, so no escaping is performed here.
///
/// Pure function of its inputs.
pub fn build_request(host: &str, path: &str) -> Vec<u8> {
    format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nContent-Length: 0\r\n\r\n").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = build_request("example.com", "/index.html");
        assert_eq!(
            request,
            b"GET /index.html HTTP/1.1\r\nHost: example.com\r\nContent-Length: 0\r\n\r\n"
        );
    }

    #[test]
    fn test_request_ends_with_header_terminator() {
        let request = build_request("example.com", "/");
        assert!(request.ends_with(b"\r\n\r\n"));
        // Nothing after the terminator: the request is body-less.
        let terminator = request
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .unwrap();
        assert_eq!(terminator + 4, request.len());
    }

    #[test]
    fn test_request_carries_path_with_query() {
        let request = build_request("example.com", "/search?q=rust");
        assert!(request.starts_with(b"GET /search?q=rust HTTP/1.1\r\n"));
    }
}
