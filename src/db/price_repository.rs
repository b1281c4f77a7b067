// src/db/price_repository.rs
// DOCUMENTATION: Price tier database operations
// PURPOSE: Read-only listing of price tiers with their room category

use super::persistence_error;
use crate::errors::HotelError;
use crate::models::{Price, PriceRow};
use sqlx::PgPool;

pub struct PriceRepository;

impl PriceRepository {
    /// List price tiers, optionally for one category
    /// DOCUMENTATION: Ordered by category, then by stay length
    pub async fn list_prices(
        pool: &PgPool,
        category_id: Option<i32>,
    ) -> Result<Vec<Price>, HotelError> {
        let rows = sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT
                p.id, p.label, p.hourly_hours, p.rate_cents,
                hc.id AS category_id, hc.title AS category_title, hc.specs AS category_specs
            FROM prices p
            JOIN hotel_categories hc ON hc.id = p.category_id
            WHERE ($1::INT IS NULL OR p.category_id = $1)
            ORDER BY hc.id ASC, p.hourly_hours ASC, p.id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
        .map_err(persistence_error("Failed to fetch prices"))?;

        Ok(rows.into_iter().map(PriceRow::into_price).collect())
    }
}
