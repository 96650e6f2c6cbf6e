//! Core domain types
//!
//! Entities shared between the server (which serves them) and the client
//! (which decodes them).

pub mod user;
