//! Service operations sitting between the HTTP routes and the repository.

pub mod client;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
