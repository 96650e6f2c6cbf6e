//! Roster HTTP Client
//!
//! A small, type-safe client for the user directory REST backend.
//!
//! The client is an explicitly constructed value: build one per backend and
//! hand it (or a [`UserDirectory`] trait object) to whatever needs users.
//!
//! # Example
//!
//! ```no_run
//! use roster_client::{ClientConfig, UserApiClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = UserApiClient::new(ClientConfig::new("http://localhost:8000/api/v1"));
//!
//!     let users = client.fetch_users().await?;
//!     println!("{users}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod directory;
pub mod error;
mod status;
mod users;

// Re-export commonly used types
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use directory::UserDirectory;
pub use error::{NetworkError, Result};
pub use roster_core::domain::user::User;
pub use roster_core::dto::status::ApiStatus;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Decoded body of `GET /users`, returned to the caller untouched
pub type UsersResponse = serde_json::Value;

/// HTTP client for the user directory API
///
/// Holds an immutable [`ClientConfig`] and a shared `reqwest` connection
/// pool. Cloning is cheap and clones can be used from any task.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    config: ClientConfig,
    /// HTTP client instance
    client: Client,
}

impl UserApiClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use roster_client::{ClientConfig, UserApiClient};
    ///
    /// let client = UserApiClient::new(ClientConfig::new("http://localhost:8000/api/v1"));
    /// ```
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// Timeouts, proxies and TLS settings belong to the transport, so this is
    /// where callers configure them.
    ///
    /// # Example
    /// ```
    /// use roster_client::{ClientConfig, UserApiClient};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = UserApiClient::with_client(ClientConfig::default(), http_client);
    /// ```
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Get the endpoint configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Check the status code and deserialize the body of a successful response
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NetworkError::status_error(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| NetworkError::Decode(format!("Failed to parse JSON response: {}", e)))
    }
}

impl Default for UserApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
