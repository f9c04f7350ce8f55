use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod error;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub notes: Arc<NoteStore>,
}

/// Single-origin CORS with credentials; any method and header.
fn build_cors(config: &Config) -> Cors {
    Cors::default()
        .allowed_origin(&config.cors_allowed_origin)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes API v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Allowing CORS requests from {}", config.cors_allowed_origin);

    let notes = Arc::new(NoteStore::new());
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                notes: Arc::clone(&notes),
            }))
            .wrap(Logger::default())
            .wrap(build_cors(&config))
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind(&bind_addr)?
    .run();

    log::info!("Listening on http://{}", bind_addr);

    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::error!("Failed to listen for Ctrl+C");
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}
