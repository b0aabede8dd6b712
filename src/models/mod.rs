//! Database models and configuration shared across the service.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
