// src/services/gallery_service.rs
// DOCUMENTATION: Business logic for the admin gallery
// PURPOSE: Intermediary between gallery handlers, the store and the media gateway

use crate::db::GalleryStore;
use crate::errors::HotelError;
use crate::models::{
    CategoryIdInput, CreateGalleryImageRequest, GalleryImage, GalleryImageFields,
    NewGalleryImage, ResourceType, UploadedFile,
};
use crate::services::media_gateway::MediaGateway;
use crate::services::media_urls::resource_type_from_url;
use serde::Serialize;
use std::sync::Arc;

/// Multipart variant of a gallery upload
#[derive(Debug, Default)]
pub struct GalleryUploadForm {
    pub file: Option<UploadedFile>,
    pub category: Option<String>,
    pub caption: Option<String>,
    pub category_id: Option<String>,
}

/// Result of removing a gallery record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDeletion {
    pub id: i32,
    /// False when the host refused or failed; the row is removed regardless
    pub media_deleted: bool,
}

#[derive(Clone)]
pub struct GalleryService {
    store: Arc<dyn GalleryStore>,
    gateway: MediaGateway,
}

impl GalleryService {
    pub fn new(store: Arc<dyn GalleryStore>, gateway: MediaGateway) -> Self {
        Self { store, gateway }
    }

    /// All gallery images, newest first
    pub async fn list(&self) -> Result<Vec<GalleryImage>, HotelError> {
        self.store.list().await
    }

    /// Record media that was already uploaded elsewhere
    /// DOCUMENTATION: No upload happens on this path
    pub async fn create_from_descriptor(
        &self,
        req: CreateGalleryImageRequest,
    ) -> Result<GalleryImage, HotelError> {
        let (url, public_id) = match (non_blank(req.url), non_blank(req.public_id)) {
            (Some(url), Some(public_id)) => (url, public_id),
            _ => {
                return Err(HotelError::ValidationError(
                    "URL and public ID are required".to_string(),
                ))
            }
        };

        let fields =
            GalleryImageFields::from_raw(req.category, req.caption, req.category_id.as_ref())?;

        let image = self
            .store
            .create(&NewGalleryImage {
                url,
                public_id,
                fields,
            })
            .await?;

        log::info!("Gallery image {} recorded ({})", image.id, image.public_id);
        Ok(image)
    }

    /// Upload an image through the media gateway, then record it
    /// DOCUMENTATION: Input is fully validated before the upload starts
    pub async fn create_from_upload(
        &self,
        form: GalleryUploadForm,
    ) -> Result<GalleryImage, HotelError> {
        let file = form
            .file
            .ok_or_else(|| HotelError::ValidationError("No file provided".to_string()))?;

        if file.resource_type() != Some(ResourceType::Image) {
            return Err(HotelError::ValidationError(
                "Only image files are allowed".to_string(),
            ));
        }

        let category_id = form.category_id.map(CategoryIdInput::Text);
        let fields = GalleryImageFields::from_raw(form.category, form.caption, category_id.as_ref())?;

        let media = self.gateway.upload(file).await?;

        // The upload is not rolled back when the insert fails
        let image = self
            .store
            .create(&NewGalleryImage {
                url: media.secure_url,
                public_id: media.public_id,
                fields,
            })
            .await?;

        log::info!("Gallery image {} uploaded ({})", image.id, image.public_id);
        Ok(image)
    }

    /// Delete the hosted asset, then the record
    pub async fn delete(&self, id: i32) -> Result<GalleryDeletion, HotelError> {
        let image = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| HotelError::NotFound(format!("gallery image {}", id)))?;

        let resource_type = resource_type_from_url(&image.url);
        let media_deleted = match self.gateway.delete(&image.public_id, resource_type).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "Media for gallery image {} not deleted ({}); removing record anyway",
                    id,
                    e
                );
                false
            }
        };

        self.store.delete(id).await?;
        Ok(GalleryDeletion { id, media_deleted })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
