// src/presentation/room_details.rs
// DOCUMENTATION: Room details modal view model
// PURPOSE: Image navigation, spec defaults and feature grouping for one room

use crate::models::{RoomCategory, RoomFeature, RoomImage};
use std::collections::BTreeMap;

/// Feature category whose entries are listed as "additional features"
const FEATURE_CATEGORY: &str = "feature";
const GENERAL_CATEGORY: &str = "general";

/// Bed, occupancy and size lines with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpecSummary {
    pub bed_type: String,
    pub max_occupancy: String,
    pub room_size: String,
}

/// An active spec flag with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFeature {
    pub key: String,
    pub label: String,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct RoomDetails {
    room: RoomCategory,
    features: Vec<RoomFeature>,
    image_index: usize,
    /// Full-screen image viewer, when open
    viewer_index: Option<usize>,
}

impl RoomDetails {
    pub fn new(room: RoomCategory) -> Self {
        Self {
            room,
            features: Vec::new(),
            image_index: 0,
            viewer_index: None,
        }
    }

    pub fn room(&self) -> &RoomCategory {
        &self.room
    }

    /// Install the admin-managed feature labels once fetched
    pub fn set_features(&mut self, features: Vec<RoomFeature>) {
        self.features = features;
    }

    pub fn current_image(&self) -> Option<&RoomImage> {
        self.room
            .images
            .get(self.image_index)
            .or_else(|| self.room.images.first())
    }

    /// "2 / 5" style counter
    pub fn image_counter(&self) -> Option<String> {
        if self.room.images.is_empty() {
            None
        } else {
            Some(format!("{} / {}", self.image_index + 1, self.room.images.len()))
        }
    }

    pub fn next_image(&mut self) {
        let len = self.room.images.len();
        if len > 0 {
            self.image_index = (self.image_index + 1) % len;
        }
    }

    pub fn prev_image(&mut self) {
        let len = self.room.images.len();
        if len > 0 {
            self.image_index = (self.image_index + len - 1) % len;
        }
    }

    /// Thumbnail click
    pub fn show_image(&mut self, index: usize) {
        if index < self.room.images.len() {
            self.image_index = index;
        }
    }

    pub fn open_viewer(&mut self, index: usize) {
        if index < self.room.images.len() {
            self.viewer_index = Some(index);
        }
    }

    pub fn close_viewer(&mut self) {
        self.viewer_index = None;
    }

    pub fn viewer_image(&self) -> Option<&RoomImage> {
        self.viewer_index.and_then(|i| self.room.images.get(i))
    }

    pub fn spec_summary(&self) -> RoomSpecSummary {
        RoomSpecSummary {
            bed_type: self
                .room
                .bed_type
                .clone()
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| "Double Bed".to_string()),
            max_occupancy: match self.room.max_occupancy {
                Some(n) if n > 0 => format!("{} Guests", n),
                _ => "2 Guests".to_string(),
            },
            room_size: self
                .room
                .room_size
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "25 sqm".to_string()),
        }
    }

    /// Enabled spec flags, labelled from the feature list when known
    pub fn active_features(&self) -> Vec<ActiveFeature> {
        self.room
            .specs
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| match self.features.iter().find(|f| &f.key == key) {
                Some(feature) => ActiveFeature {
                    key: key.clone(),
                    label: feature.label.clone(),
                    category: feature.category.clone(),
                },
                None => ActiveFeature {
                    key: key.clone(),
                    label: capitalize(key),
                    category: GENERAL_CATEGORY.to_string(),
                },
            })
            .collect()
    }

    pub fn grouped_features(&self) -> BTreeMap<String, Vec<ActiveFeature>> {
        let mut grouped: BTreeMap<String, Vec<ActiveFeature>> = BTreeMap::new();
        for feature in self.active_features() {
            grouped
                .entry(feature.category.clone())
                .or_default()
                .push(feature);
        }
        grouped
    }

    /// Features under the "feature" category, or every active feature when
    /// that category is empty
    pub fn additional_features(&self) -> Vec<ActiveFeature> {
        let mut grouped = self.grouped_features();
        match grouped.remove(FEATURE_CATEGORY) {
            Some(features) if !features.is_empty() => features,
            _ => self.active_features(),
        }
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomSpecs;

    fn room(images: usize) -> RoomCategory {
        let mut specs = RoomSpecs::new();
        specs.insert("wifi".into(), true);
        specs.insert("tv".into(), true);
        specs.insert("cctv".into(), false);

        RoomCategory {
            id: 1,
            slug: "deluxe".into(),
            title: "Deluxe".into(),
            description: None,
            specs,
            essential_amenities: vec![],
            bed_type: None,
            max_occupancy: Some(3),
            room_size: None,
            room_count: 4,
            video_url: None,
            images: (0..images)
                .map(|i| RoomImage {
                    id: i as i32,
                    url: format!("https://example.com/{i}.jpg"),
                    caption: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_image_navigation_wraps() {
        let mut details = RoomDetails::new(room(3));
        details.prev_image();
        assert_eq!(details.image_counter().as_deref(), Some("3 / 3"));
        details.next_image();
        assert_eq!(details.current_image().unwrap().id, 0);
    }

    #[test]
    fn test_navigation_without_images_is_noop() {
        let mut details = RoomDetails::new(room(0));
        details.next_image();
        assert!(details.current_image().is_none());
        assert!(details.image_counter().is_none());
    }

    #[test]
    fn test_spec_defaults() {
        let summary = RoomDetails::new(room(0)).spec_summary();
        assert_eq!(summary.bed_type, "Double Bed");
        assert_eq!(summary.max_occupancy, "3 Guests");
        assert_eq!(summary.room_size, "25 sqm");
    }

    #[test]
    fn test_features_use_labels_then_fallback() {
        let mut details = RoomDetails::new(room(0));
        details.set_features(vec![RoomFeature {
            key: "wifi".into(),
            label: "High-speed WiFi".into(),
            category: "feature".into(),
        }]);

        let grouped = details.grouped_features();
        assert_eq!(grouped["feature"][0].label, "High-speed WiFi");
        assert_eq!(grouped["general"][0].label, "Tv");

        let additional = details.additional_features();
        assert_eq!(additional.len(), 1);
    }

    #[test]
    fn test_additional_features_fall_back_to_all() {
        let details = RoomDetails::new(room(0));
        assert_eq!(details.additional_features().len(), 2);
    }

    #[test]
    fn test_viewer() {
        let mut details = RoomDetails::new(room(2));
        details.open_viewer(5);
        assert!(details.viewer_image().is_none());
        details.open_viewer(1);
        assert_eq!(details.viewer_image().unwrap().id, 1);
        details.close_viewer();
        assert!(details.viewer_image().is_none());
    }
}
