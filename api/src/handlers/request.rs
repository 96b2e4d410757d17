//! Request metadata helpers

use actix_web::HttpRequest;

const UNKNOWN_IP: &str = "unknown";

/// Resolve the client ip
///
/// With `trust_forwarded` set: first entry of `X-Forwarded-For`, then
/// `X-Real-IP`, then the peer address. Without it only the peer address
/// counts, since clients can set those headers freely.
pub fn client_ip(req: &HttpRequest, trust_forwarded: bool) -> String {
    if !trust_forwarded {
        return peer_ip(req);
    }

    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    if let Some(forwarded) = header("X-Forwarded-For") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
            return first.to_string();
        }
    }

    if let Some(real_ip) = header("X-Real-IP") {
        return real_ip.to_string();
    }

    peer_ip(req)
}

fn peer_ip(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_IP.to_string())
}
