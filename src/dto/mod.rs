//! DTOs returned by the client records API.

pub mod api;
pub mod client;
