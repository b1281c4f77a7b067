// src/models/media.rs
// DOCUMENTATION: Media host data structures
// PURPOSE: Upload/delete request and response shapes for the media gateway

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse media kind, selects the host's upload/destroy path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
        }
    }

    /// Classify a declared MIME type; anything but image/* or video/* is None
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type.trim().to_ascii_lowercase();
        if essence.starts_with("image/") {
            Some(ResourceType::Image)
        } else if essence.starts_with("video/") {
            Some(ResourceType::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            other => Err(format!("Unsupported resource type: {}", other)),
        }
    }
}

/// A file received from a client, fully buffered
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    /// Declared content type of the multipart field
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.content_type.as_deref().and_then(ResourceType::from_mime)
    }
}

/// Normalized result of a successful upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub secure_url: String,
    pub public_id: String,
    pub resource_type: ResourceType,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub bytes: u64,
}

/// Body of POST /api/upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub media: MediaDescriptor,
    pub success: bool,
}

/// Query string of DELETE /api/upload
#[derive(Debug, Deserialize)]
pub struct DeleteMediaQuery {
    #[serde(rename = "publicId")]
    pub public_id: Option<String>,
    #[serde(rename = "resourceType")]
    pub resource_type: Option<String>,
}

/// Body of a successful DELETE /api/upload
#[derive(Debug, Serialize)]
pub struct DeleteMediaResponse {
    pub success: bool,
    pub message: String,
    pub public_id: String,
}

/// Outcome of a bulk deletion
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkDeleteReport {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    /// Identifiers the host did not confirm
    pub failed_ids: Vec<String>,
}
