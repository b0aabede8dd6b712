use actix_web::{HttpResponse, Responder, get, post, put, web};
use serde::Deserialize;

use crate::dto::client::ClientView;
use crate::forms::client::ClientCreateRequest;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{CLIENTS_PATH, service_error_response};
use crate::services::client as client_service;

#[derive(Deserialize)]
struct SearchQueryParams {
    key: String,
}

fn with_self_links(views: Vec<ClientView>, server_config: &ServerConfig) -> Vec<ClientView> {
    let collection_url = format!(
        "{}{}",
        server_config.base_url.trim_end_matches('/'),
        CLIENTS_PATH
    );
    views
        .into_iter()
        .map(|view| view.with_self_link(&collection_url))
        .collect()
}

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<ClientCreateRequest>,
) -> impl Responder {
    match client_service::create_client(repo.get_ref(), &request) {
        Ok(view) => HttpResponse::Created().json(view),
        Err(err) => service_error_response(&err),
    }
}

#[get("/clients")]
pub async fn get_clients(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match client_service::get_all_clients(repo.get_ref()) {
        Ok(views) => HttpResponse::Ok().json(with_self_links(views, &server_config)),
        Err(err) => service_error_response(&err),
    }
}

#[get("/clients/search")]
pub async fn search_clients(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match client_service::search_for_client_by_key(repo.get_ref(), &params.key) {
        Ok(views) => HttpResponse::Ok().json(with_self_links(views, &server_config)),
        Err(err) => service_error_response(&err),
    }
}

#[get("/clients/{client_id}")]
pub async fn get_client_by_id(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match client_service::get_client_by_id(repo.get_ref(), Some(client_id.into_inner())) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => service_error_response(&err),
    }
}

#[put("/clients/{client_id}")]
pub async fn edit_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(request): web::Json<ClientCreateRequest>,
) -> impl Responder {
    match client_service::edit_client(repo.get_ref(), Some(client_id.into_inner()), &request) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => service_error_response(&err),
    }
}
