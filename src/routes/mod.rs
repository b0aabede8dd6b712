//! HTTP surface of the service.
//!
//! Handlers never apply business rules themselves; they only translate
//! already classified [`ServiceError`] values into status codes and bodies.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse, web};

use crate::dto::api::{ApiError, ApiErrorType};
use crate::services::ServiceError;

pub mod api;

/// Path under which clients are exposed, relative to the public base url.
pub const CLIENTS_PATH: &str = "/api/clients";

/// Maps a service failure to its HTTP response.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidField(message) => HttpResponse::BadRequest()
            .json(ApiError::new(ApiErrorType::ValidationError, message.as_str())),
        ServiceError::NotFound(message) => HttpResponse::NotFound()
            .json(ApiError::new(ApiErrorType::NotFoundError, message.as_str())),
        ServiceError::Database(message) => HttpResponse::InternalServerError()
            .json(ApiError::new(ApiErrorType::InternalError, message.as_str())),
    }
}

fn bad_request(message: String, cause: impl std::fmt::Display) -> Error {
    log::warn!("Rejected request: {cause}");
    let body = ApiError::new(ApiErrorType::ValidationError, message);
    InternalError::from_response(cause.to_string(), HttpResponse::BadRequest().json(body)).into()
}

/// Malformed JSON bodies become validation errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid request body: {err}");
    bad_request(message, err)
}

/// Unparseable path segments (e.g. a non-integer id) become validation errors.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid path parameter: {err}");
    bad_request(message, err)
}

/// Missing or malformed query parameters become validation errors.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let message = format!("Invalid query parameters: {err}");
    bad_request(message, err)
}

/// Registers the client routes and their extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .service(api::create_client)
                .service(api::get_clients)
                // Registered before `/clients/{id}` so "search" is not parsed as an id.
                .service(api::search_clients)
                .service(api::get_client_by_id)
                .service(api::edit_client),
        );
}
