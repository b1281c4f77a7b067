// src/models/gallery.rs
// DOCUMENTATION: Gallery image data structures
// PURPOSE: Database rows, API DTOs and input validation for the admin gallery

use crate::errors::HotelError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Hotel category summary joined onto gallery images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
}

/// Gallery image as returned by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i32,
    pub url: String,
    /// Media host reference, used for deletion
    pub public_id: String,
    pub category: String,
    pub caption: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub hotel_category: Option<CategorySummary>,
}

/// Row shape of `gallery_images LEFT JOIN hotel_categories`
#[derive(Debug, FromRow)]
pub struct GalleryImageRow {
    pub id: i32,
    pub url: String,
    pub public_id: String,
    pub category: String,
    pub caption: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub hotel_category_title: Option<String>,
    pub hotel_category_slug: Option<String>,
}

impl GalleryImageRow {
    /// Convert joined row into the API model
    pub fn into_image(self) -> GalleryImage {
        let hotel_category = match (
            self.category_id,
            self.hotel_category_title,
            self.hotel_category_slug,
        ) {
            (Some(id), Some(title), Some(slug)) => Some(CategorySummary { id, title, slug }),
            _ => None,
        };

        GalleryImage {
            id: self.id,
            url: self.url,
            public_id: self.public_id,
            category: self.category,
            caption: self.caption,
            category_id: self.category_id,
            created_at: self.created_at,
            hotel_category,
        }
    }
}

/// `categoryId` arrives either as a JSON number or as a form string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryIdInput {
    Number(i64),
    Text(String),
}

impl CategoryIdInput {
    /// Parse into an id; blank text and 0 mean "no category"
    pub fn parse(&self) -> Result<Option<i32>, HotelError> {
        let invalid = || HotelError::ValidationError("categoryId must be an integer".to_string());
        let id = match self {
            CategoryIdInput::Number(n) => i32::try_from(*n).map_err(|_| invalid())?,
            CategoryIdInput::Text(s) if s.trim().is_empty() => return Ok(None),
            CategoryIdInput::Text(s) => s.trim().parse::<i32>().map_err(|_| invalid())?,
        };
        Ok(Some(id).filter(|id| *id != 0))
    }
}

/// JSON body of POST /api/admin/gallery (media already uploaded)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryImageRequest {
    pub category: Option<String>,
    pub caption: Option<String>,
    pub url: Option<String>,
    pub public_id: Option<String>,
    pub category_id: Option<CategoryIdInput>,
}

/// Validated descriptive fields shared by the JSON and multipart paths
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct GalleryImageFields {
    #[validate(length(min = 1, max = 50, message = "category must be 1-50 characters"))]
    pub category: String,

    #[validate(length(max = 500, message = "caption must be at most 500 characters"))]
    pub caption: Option<String>,

    #[validate(range(min = 1, message = "categoryId must be positive"))]
    pub category_id: Option<i32>,
}

impl GalleryImageFields {
    /// Normalize raw inputs and run the validation schema
    /// Empty captions are treated as absent
    pub fn from_raw(
        category: Option<String>,
        caption: Option<String>,
        category_id: Option<&CategoryIdInput>,
    ) -> Result<Self, HotelError> {
        let category_id = match category_id {
            Some(raw) => raw.parse()?,
            None => None,
        };

        let fields = GalleryImageFields {
            category: category.map(|c| c.trim().to_string()).unwrap_or_default(),
            caption: caption.filter(|c| !c.trim().is_empty()),
            category_id,
        };

        fields
            .validate()
            .map_err(|e| HotelError::ValidationError(e.to_string()))?;

        Ok(fields)
    }
}

/// Insert payload for a new gallery record
#[derive(Debug, Clone, PartialEq)]
pub struct NewGalleryImage {
    pub url: String,
    pub public_id: String,
    pub fields: GalleryImageFields,
}
