//! User API Handlers

use axum::Json;
use roster_core::domain::user::User;

use crate::service::user as user_service;

/// GET /api/v1/users
/// List all users
pub async fn list_users() -> Json<Vec<User>> {
    tracing::debug!("Listing users");
    Json(user_service::list_users())
}
