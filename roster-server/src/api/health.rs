//! Root API Handler
//!
//! Liveness endpoint at the server root.

use axum::Json;
use roster_core::dto::status::ApiStatus;

/// GET /
pub async fn root() -> Json<ApiStatus> {
    Json(ApiStatus::new("API is running"))
}
