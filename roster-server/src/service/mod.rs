//! Service Layer
//!
//! Data behind the HTTP handlers.

pub mod user;
