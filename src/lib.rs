//! Client records REST service.
//!
//! Layers, leaves first: [`repository`] persists clients in SQLite,
//! [`services`] validates requests and classifies store failures, and
//! [`routes`] exposes the operations over HTTP.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::{establish_connection_pool, run_migrations};
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        run_migrations(&pool)
            .map_err(|e| std::io::Error::other(format!("Failed to prepare database: {e}")))?;

        let repo = DieselRepository::new(pool);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{}",
            server_config.address,
            server_config.port
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .configure(crate::routes::configure)
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
