//! API Module
//!
//! HTTP API layer for the user directory.
//! Each submodule handles endpoints for a specific domain.

pub mod health;
pub mod user;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Prefix the versioned API is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Create the main API router with all endpoints
pub fn create_router() -> Router {
    let v1 = Router::new().route("/users", get(user::list_users));

    Router::new()
        // Liveness
        .route("/", get(health::root))
        // Versioned API
        .nest(API_PREFIX, v1)
        .layer(TraceLayer::new_for_http())
}
