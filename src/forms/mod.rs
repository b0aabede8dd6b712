//! Request payloads accepted by the client records API.

pub mod client;
