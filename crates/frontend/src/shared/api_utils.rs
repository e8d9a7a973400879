//! Base URL of the backend proxy.

/// Default backend port; `trunk serve` runs the UI on a different one.
pub const BACKEND_PORT: u16 = 3000;

/// API base built from the current window location, e.g.
/// `"http://localhost:3000"`. Empty string outside a browser.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL for an `/api/...` path.
///
/// ```rust,ignore
/// let url = api_url("/api/orders");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
