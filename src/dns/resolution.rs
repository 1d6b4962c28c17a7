//! Hostname resolution for fetch sessions.

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::FetchError;

/// Resolves a host to the address a session should connect to.
///
/// IP literals (as in `http://127.0.0.1:8080/`, including bracketed IPv6
/// hosts) bypass DNS entirely. Otherwise the shared resolver performs a
/// forward lookup and the first address wins.
///
/// # Errors
///
/// Returns [`FetchError::Resolution`] if the lookup fails or yields no
/// addresses.
pub async fn resolve_host_addr(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<IpAddr, FetchError> {
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = bare.parse::<IpAddr>() {
        return Ok(ip);
    }

    let response = resolver
        .lookup_ip(host)
        .await
        .map_err(|e| FetchError::Resolution {
            host: host.to_string(),
            message: e.to_string(),
        })?;
    response.iter().next().ok_or_else(|| FetchError::Resolution {
        host: host.to_string(),
        message: "no addresses found".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::init_resolver;

    #[tokio::test]
    async fn test_ipv4_literal_bypasses_dns() {
        let resolver = init_resolver().unwrap();
        let ip = resolve_host_addr("127.0.0.1", &resolver).await.unwrap();
        assert_eq!(ip, "127.0.0.1".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_bracketed_ipv6_literal_bypasses_dns() {
        let resolver = init_resolver().unwrap();
        let ip = resolve_host_addr("[::1]", &resolver).await.unwrap();
        assert_eq!(ip, "::1".parse::<IpAddr>().unwrap());
    }
}
