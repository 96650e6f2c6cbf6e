//! Injection seam for user lookups
//!
//! Consumers take a `&dyn UserDirectory` instead of reaching for a global
//! client, so each caller can be handed its own configured backend (or a fake).

use async_trait::async_trait;

use crate::error::Result;
use crate::{User, UserApiClient, UsersResponse};

/// Source of the user list
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Raw decoded user list
    async fn fetch_users(&self) -> Result<UsersResponse>;

    /// Typed user list
    async fn list_users(&self) -> Result<Vec<User>>;
}

#[async_trait]
impl UserDirectory for UserApiClient {
    async fn fetch_users(&self) -> Result<UsersResponse> {
        UserApiClient::fetch_users(self).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        UserApiClient::list_users(self).await
    }
}
