// src/presentation/category_card.rs
// DOCUMENTATION: Room category card view model

use super::media_slot::MediaSlot;
use super::room_details::RoomDetails;
use crate::models::RoomCategory;

/// Display label for a spec key; unknown keys are shown as-is
pub fn spec_label(key: &str) -> &str {
    match key {
        "wifi" => "WiFi",
        "ac" => "Air Conditioning",
        "tv" => "TV",
        "geyser" => "Geyser",
        "cctv" => "CCTV",
        "parking" => "Parking",
        "attached" => "Attached Bathroom",
        other => other,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecBadge {
    pub key: String,
    pub label: String,
}

/// A card on the rooms page, with its details modal
#[derive(Debug, Clone)]
pub struct CategoryCard {
    category: RoomCategory,
    media: MediaSlot,
    details: Option<RoomDetails>,
}

impl CategoryCard {
    pub fn new(category: RoomCategory) -> Self {
        let media = MediaSlot::new(category.video_url.as_deref(), &category.images);
        Self {
            category,
            media,
            details: None,
        }
    }

    pub fn media(&self) -> &MediaSlot {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut MediaSlot {
        &mut self.media
    }

    /// Shows the "Video" badge
    pub fn has_video(&self) -> bool {
        self.media.has_video()
    }

    pub fn availability_label(&self) -> String {
        format!("{} Available", self.category.room_count)
    }

    pub fn spec_badges(&self) -> Vec<SpecBadge> {
        self.category
            .specs
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| SpecBadge {
                key: key.clone(),
                label: spec_label(key).to_string(),
            })
            .collect()
    }

    pub fn is_modal_open(&self) -> bool {
        self.details.is_some()
    }

    /// "View Details": opens a fresh modal
    pub fn open_details(&mut self) -> &mut RoomDetails {
        self.details
            .insert(RoomDetails::new(self.category.clone()))
    }

    pub fn details_mut(&mut self) -> Option<&mut RoomDetails> {
        self.details.as_mut()
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }
}
