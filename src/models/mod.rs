//! Configuration and wire models shared across the service.

#[cfg(feature = "server")]
pub mod config;
pub mod team_member;
