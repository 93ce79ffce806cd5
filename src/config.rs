//! Client configuration: API base URL, endpoint paths, and the request
//! timeout.
//!
//! The base URL is the single source of truth for every request the client
//! issues. It is read from the `WINDCHILL_API_URL` environment variable at
//! compile time (Trunk forwards it to `rustc`) and falls back to the local
//! development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `WINDCHILL_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Per-client request timeout. A call that exceeds it fails with
/// [`ApiError::Timeout`](crate::net::ApiError::Timeout); nothing is retried.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Resolve the API base URL for this build.
pub fn api_base_url() -> String {
    option_env!("WINDCHILL_API_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_owned()
}

/// Endpoint paths, relative to the base URL.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const USERS: &str = "/users";
    pub const PRODUCTS: &str = "/products";
    pub const DOCUMENTS: &str = "/documents";
    pub const PROJECTS: &str = "/projects";
}
