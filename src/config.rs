use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROXY_ADDR: &str = "0.0.0.0:3000";

/// Base URL of the question-answering backend (`BACKEND_URL` env var).
/// The proxy appends `/ask` to this.
pub fn backend_url() -> String {
    env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

/// Base URL the TUI uses to reach the proxy (`PROXY_URL` env var).
pub fn proxy_url() -> String {
    env::var("PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string())
}

/// Listen address for the proxy server (`PROXY_ADDR` env var).
pub fn proxy_addr() -> String {
    env::var("PROXY_ADDR").unwrap_or_else(|_| DEFAULT_PROXY_ADDR.to_string())
}
