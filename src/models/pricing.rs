// src/models/pricing.rs
// DOCUMENTATION: Price tier data structures
// PURPOSE: Rows and API models for GET /api/prices

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

/// Capability flags of a room category (wifi, ac, tv, ...)
pub type RoomSpecs = BTreeMap<String, bool>;

/// Category block nested in each price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCategory {
    pub id: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<RoomSpecs>,
}

/// A price tier for a room category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: i32,
    #[serde(default)]
    pub label: Option<String>,
    /// Stay length covered by this tier
    pub hourly_hours: i32,
    /// Price in paise
    pub rate_cents: i64,
    pub category: PriceCategory,
}

impl Price {
    /// Rate per hour in paise; zero-hour tiers have no meaningful rate
    pub fn per_hour_rate(&self) -> Option<f64> {
        if self.hourly_hours > 0 {
            Some(self.rate_cents as f64 / self.hourly_hours as f64)
        } else {
            None
        }
    }
}

/// Row shape of `prices JOIN hotel_categories`
#[derive(Debug, FromRow)]
pub struct PriceRow {
    pub id: i32,
    pub label: Option<String>,
    pub hourly_hours: i32,
    pub rate_cents: i64,
    pub category_id: i32,
    pub category_title: String,
    pub category_specs: Option<serde_json::Value>,
}

impl PriceRow {
    /// Convert joined row into the API model
    /// Malformed specs JSON is dropped rather than failing the listing
    pub fn into_price(self) -> Price {
        let specs = self.category_specs.and_then(|value| {
            serde_json::from_value::<RoomSpecs>(value)
                .map_err(|e| log::warn!("Ignoring malformed specs for category {}: {}", self.category_id, e))
                .ok()
        });

        Price {
            id: self.id,
            label: self.label,
            hourly_hours: self.hourly_hours,
            rate_cents: self.rate_cents,
            category: PriceCategory {
                id: self.category_id,
                title: self.category_title,
                specs,
            },
        }
    }
}

/// Query string of GET /api/prices
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
}

/// Envelope returned by GET /api/prices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Price>,
}
