//! # Service Configuration
//!
//! The generation service's base URL is the only external setting this
//! client needs. It comes from the environment so a deployment can point at
//! a different host without rebuilding; everything else about the endpoints
//! lives in [`crate::api`].

use once_cell::sync::Lazy;

/// Environment variable naming the service base URL.
pub const API_URL_VAR: &str = "STEELDRAW_API_URL";

/// Default service location for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolved service base URL, trailing slash trimmed. Read once at startup.
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    std::env::var(API_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
});

/// Full URL for a service path such as `/generate/ibeam`.
pub fn endpoint_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.as_str(), path)
}
