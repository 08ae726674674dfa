//! Caller IP extraction for click records.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Stored in place of an IP address that could not be determined.
pub const UNKNOWN_IP: &str = "undefined";

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Resolves the caller's IP address as text.
///
/// Uses the peer socket address by default. When `behind_proxy` is set the
/// first `X-Forwarded-For` entry wins, then `X-Real-IP`; a header value that
/// is not an IP address yields [`UNKNOWN_IP`] rather than the proxy's own
/// address.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if !behind_proxy {
        return peer.ip().to_string();
    }

    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| headers.get(X_REAL_IP).and_then(|v| v.to_str().ok()));

    match forwarded {
        Some(raw) => parse_ip(raw.trim()),
        None => peer.ip().to_string(),
    }
}

fn parse_ip(raw: &str) -> String {
    if let Ok(ip) = raw.parse::<IpAddr>() {
        return ip.to_string();
    }

    // "host:port" and "[v6]:port" forms
    match raw.parse::<SocketAddr>() {
        Ok(addr) => addr.ip().to_string(),
        Err(_) => {
            tracing::warn!(value = raw, "can't get ip from forwarded header");
            UNKNOWN_IP.to_string()
        }
    }
}
