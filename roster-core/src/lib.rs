//! Roster Core
//!
//! Shared types for the Roster user directory.
//!
//! This crate contains:
//! - Domain types: the `User` entity served by the backend
//! - DTOs: small payloads exchanged between the server and its clients

pub mod domain;
pub mod dto;
