//! Client IP resolution for visit tracking.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Recorded when no client address can be determined.
pub const UNKNOWN_IP: &str = "unknown";

/// Resolves the address a visit is attributed to.
///
/// With `behind_proxy` set, the first valid IP in `X-Forwarded-For` wins,
/// then `X-Real-IP`. Otherwise, or when neither header holds an IP, the
/// socket peer address is used. Falls back to [`UNKNOWN_IP`].
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
///
/// assert_eq!(resolve_client_ip(&headers, None, true), "203.0.113.7");
/// ```
pub fn resolve_client_ip(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    behind_proxy: bool,
) -> String {
    if behind_proxy && let Some(ip) = forwarded_ip(headers) {
        return ip.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    let from_forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    from_forwarded_for.or_else(|| {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<IpAddr>().ok())
    })
}
