//! Data Transfer Objects
//!
//! Lightweight payloads that only exist on the wire.

pub mod status;
