// src/handlers/prices.rs
// DOCUMENTATION: Public price listing
// PURPOSE: GET /api/prices, consumed by the price table

use crate::db::PriceRepository;
use crate::errors::HotelError;
use crate::models::{PriceListResponse, PriceQuery};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/prices?categoryId=3
/// List price tiers, optionally for one room category
pub async fn list_prices(
    pool: web::Data<PgPool>,
    query: web::Query<PriceQuery>,
) -> Result<impl Responder, HotelError> {
    let data = PriceRepository::list_prices(pool.get_ref(), query.category_id).await?;

    Ok(HttpResponse::Ok().json(PriceListResponse {
        success: true,
        data,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/prices", web::get().to(list_prices));
}
