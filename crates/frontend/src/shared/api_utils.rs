//! API utilities for talking to the shipment gateway.
//!
//! Provides helper functions for constructing gateway URLs.

/// Get the base URL for gateway requests
///
/// Constructs the base URL from the current window location, using port 3000
/// for the gateway.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full gateway URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// let url = api_url("/api/receiving/shipments");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
