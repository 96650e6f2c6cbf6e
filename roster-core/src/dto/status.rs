//! Status DTOs

use serde::{Deserialize, Serialize};

/// Body of the backend root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Human readable liveness message (e.g., "API is running")
    pub message: String,
}

impl ApiStatus {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
