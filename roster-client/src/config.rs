//! Client configuration

/// Base URL of the reference backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Prefix under which the backend mounts its user routes
pub const API_PREFIX: &str = "/api/v1";

/// Fixed endpoint configuration of a [`UserApiClient`](crate::UserApiClient)
///
/// The URL is not validated here. A malformed base URL surfaces as a
/// transport error on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration rooted at `base_url` (e.g., "http://localhost:8000/api/v1")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Root address every request path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path (with leading slash) against the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Server root, i.e. the base URL without the API prefix
    pub fn root_url(&self) -> &str {
        self.base_url
            .strip_suffix(API_PREFIX)
            .unwrap_or(&self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
