// src/config/db.rs
// DOCUMENTATION: PostgreSQL pool for the gallery and price tables
// PURPOSE: One shared pool, checked against both tables before the server accepts traffic

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Open the pool behind GalleryRepository and the price listing
/// DOCUMENTATION: Size and acquire timeout come from DB_MAX_CONNECTIONS and
/// DB_CONNECTION_TIMEOUT; a failed table check aborts startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Connecting to gallery/price database");

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // 5 min idle, 30 min lifetime
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Fails startup when either table is missing
    sqlx::query("SELECT 1 FROM gallery_images, prices LIMIT 1")
        .execute(&pool)
        .await?;

    log::info!(
        "Database ready ({} connections, {}s acquire timeout)",
        config.db_max_connections,
        config.db_connection_timeout
    );
    Ok(pool)
}
