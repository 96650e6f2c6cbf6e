//! Configuration module
//!
//! Handles CLI configuration.

use roster_client::{ClientConfig, UserApiClient};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the user directory API
    pub api_url: String,
}

impl Config {
    /// Build the API client this configuration points at
    pub fn client(&self) -> UserApiClient {
        UserApiClient::new(ClientConfig::new(&self.api_url))
    }
}
