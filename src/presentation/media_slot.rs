// src/presentation/media_slot.rs
// DOCUMENTATION: Video with image fallback

use crate::models::RoomImage;

/// Shown when a category has no images at all
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-room.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Video { src: String, poster: String },
    Image { src: String },
}

/// One media area driven by load/error events
#[derive(Debug, Clone)]
pub struct MediaSlot {
    video_url: Option<String>,
    image_url: String,
    video_failed: bool,
    video_loaded: bool,
}

impl MediaSlot {
    pub fn new(video_url: Option<&str>, images: &[RoomImage]) -> Self {
        Self {
            video_url: video_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            image_url: images
                .first()
                .map(|image| image.url.clone())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            video_failed: false,
            video_loaded: false,
        }
    }

    /// True when a video is configured, whether or not it plays
    pub fn has_video(&self) -> bool {
        self.video_url.is_some()
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn is_video_loaded(&self) -> bool {
        self.video_loaded
    }

    /// What to render right now
    pub fn current(&self) -> MediaSource {
        match &self.video_url {
            Some(src) if !self.video_failed => MediaSource::Video {
                src: src.clone(),
                poster: self.image_url.clone(),
            },
            _ => MediaSource::Image {
                src: self.image_url.clone(),
            },
        }
    }

    pub fn on_video_loaded(&mut self) {
        self.video_loaded = true;
    }

    pub fn on_video_error(&mut self) {
        if let Some(src) = &self.video_url {
            log::warn!("Video failed to load: {}", src);
        }
        self.video_failed = true;
        self.video_loaded = false;
    }
}
