mod config;
mod detector;
mod error;
mod routes;

use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use detector::Detector;
use routes::{configure_routes, cors_policy};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::from(e)
    })?;

    let detector = web::Data::new(Detector::new());
    log::info!("Ingredient detector ready (placeholder results)");

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(cors_policy())
            .app_data(detector.clone())
            .configure(configure_routes)
    });
    if let Some(workers) = config.workers {
        log::info!("Using {} workers", workers);
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
