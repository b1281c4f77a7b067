// src/models/room.rs
// DOCUMENTATION: Room category data consumed by the view models

use super::RoomSpecs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomImage {
    pub id: i32,
    pub url: String,
    pub caption: Option<String>,
}

/// A room category with its media, as rendered on the rooms page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCategory {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub specs: RoomSpecs,
    #[serde(default)]
    pub essential_amenities: Vec<String>,
    pub bed_type: Option<String>,
    pub max_occupancy: Option<i32>,
    pub room_size: Option<String>,
    #[serde(default)]
    pub room_count: i32,
    pub video_url: Option<String>,
    #[serde(default)]
    pub images: Vec<RoomImage>,
}

/// Admin-managed label for a spec key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomFeature {
    pub key: String,
    pub label: String,
    pub category: String,
}
