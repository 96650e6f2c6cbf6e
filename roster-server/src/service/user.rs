//! User service
//!
//! The directory is a fixed set of records; there is no persistence.

use roster_core::domain::user::User;

/// All users known to the directory
pub fn list_users() -> Vec<User> {
    vec![
        User::new(1, "user1", "user1@example.com"),
        User::new(2, "user2", "user2@example.com"),
    ]
}
