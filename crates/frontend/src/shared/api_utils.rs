//! API utilities for frontend-backend communication
//!
//! Helpers for building API URLs. The condominium backend serves the pages and
//! the API from the same origin, so the base is usually empty.

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - Origin prefix like "https://example.com", or "" for a relative URL
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("", "/api/condominio_tipo/7"), "/api/condominio_tipo/7");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Percent-encode a value used as a single path segment
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Whether an HTTP status counts as success (same rule as `Response.ok`)
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
