use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Message returned when a write collides with an existing identity or mobile number.
pub const DUPLICATE_CLIENT_MESSAGE: &str =
    "ID number or Mobile number that you have supplied already exists";
/// Generic message for storage faults; internal detail is only logged.
pub const DATABASE_FAILURE_MESSAGE: &str = "Something went wrong! Please try again later";
pub const NULL_ID_MESSAGE: &str = "Id cannot be null";
pub const UNKNOWN_ID_MESSAGE: &str = "Provided id does not exist";

/// Domain level failures surfaced to the API layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Client supplied data failed a precondition or collided with a unique field.
    #[error("{0}")]
    InvalidField(String),

    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unclassified storage fault.
    #[error("{0}")]
    Database(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConstraintViolation(detail) => {
                log::warn!("Rejected write: {detail}");
                ServiceError::InvalidField(DUPLICATE_CLIENT_MESSAGE.to_string())
            }
            RepositoryError::NotFound => ServiceError::NotFound(UNKNOWN_ID_MESSAGE.to_string()),
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Database(DATABASE_FAILURE_MESSAGE.to_string())
            }
        }
    }
}
