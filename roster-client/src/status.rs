//! Backend liveness endpoint

use crate::error::Result;
use crate::{ApiStatus, UserApiClient};

impl UserApiClient {
    /// Query the backend root for its status message
    ///
    /// The root is the base URL with the `/api/v1` prefix removed, so a client
    /// configured for `http://localhost:8000/api/v1` asks `http://localhost:8000/`.
    pub async fn api_status(&self) -> Result<ApiStatus> {
        let url = format!("{}/", self.config.root_url());
        self.get_json(&url).await
    }
}
