//! User domain model
//!
//! A user record as listed by the directory backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier assigned by the backend
    pub id: i64,

    /// Login name
    pub username: String,

    /// Contact address
    pub email: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.username, self.email)
    }
}
