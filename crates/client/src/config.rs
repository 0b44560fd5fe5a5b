//! Client configuration.
//!
//! The backend base URL is the only setting. It is passed in
//! explicitly at construction so the client can be pointed at an
//! arbitrary backend (e.g. a test server on an ephemeral port)
//! without touching the process environment.

/// Default backend for local development, matching the backend's
/// default bind address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Configuration for a [`JobsClient`](crate::JobsClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base HTTP URL of the job API, without a trailing slash,
    /// e.g. `http://localhost:8000/api`.
    pub base_url: String,
}

impl ClientConfig {
    /// Build a config targeting the given base URL.
    ///
    /// A single trailing slash is stripped so endpoint paths can be
    /// appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                     |
    /// |------------------|-----------------------------|
    /// | `README_API_URL` | `http://localhost:8000/api` |
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("README_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
