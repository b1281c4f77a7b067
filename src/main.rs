// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, media host and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use dolly_hotel::config::{self, Config, MediaHostConfig};
use dolly_hotel::db::GalleryRepository;
use dolly_hotel::errors::HotelError;
use dolly_hotel::handlers;
use dolly_hotel::services::{
    CloudinaryClient, GalleryService, MediaGateway, MediaHost, UnconfiguredHost,
};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;

/// Pick the media host for this process
/// DOCUMENTATION: Missing credentials do not stop the server; every media
/// call then fails with the list of missing variables
fn build_media_host() -> Arc<dyn MediaHost> {
    match MediaHostConfig::from_env() {
        Ok(host_config) => {
            log::info!(
                "Media host: Cloudinary cloud '{}', folder '{}'",
                host_config.cloud_name,
                host_config.folder
            );
            Arc::new(CloudinaryClient::new(host_config))
        }
        Err(HotelError::ConfigurationError(missing)) => {
            log::error!("Cloudinary env missing: {}", missing.join(", "));
            Arc::new(UnconfiguredHost::new(missing))
        }
        Err(e) => {
            log::error!("Media host configuration failed: {}", e);
            Arc::new(UnconfiguredHost::new(Vec::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting dolly-hotel backend...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Media gateway and gallery service
    let gateway = MediaGateway::new(build_media_host(), config.upload_policy);
    let gallery = GalleryService::new(
        Arc::new(GalleryRepository::new(pool.clone())),
        gateway.clone(),
    );
    log::info!(
        "Upload limits: video {} bytes, request {} bytes",
        config.upload_policy.max_video_bytes,
        config.upload_policy.max_upload_bytes
    );

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let pool = web::Data::new(pool);
    let config = web::Data::new(config);
    let gateway = web::Data::new(gateway);
    let gallery = web::Data::new(gallery);

    HttpServer::new(move || {
        App::new()
            // Application state
            .app_data(pool.clone())
            .app_data(config.clone())
            .app_data(gateway.clone())
            .app_data(gallery.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::upload_config)
            .configure(handlers::admin_config)
            .configure(handlers::prices_config)
            .configure(handlers::contact_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
