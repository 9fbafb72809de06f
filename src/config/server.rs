//! Server configuration from environment variables.

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Address the HTTP server binds to, from `BIND_ADDR` or a localhost default.
#[must_use]
pub fn bind_address() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
}
