// src/handlers/upload.rs
// DOCUMENTATION: Media upload and deletion endpoints
// PURPOSE: POST /api/upload forwards a file to the media host, DELETE removes one

use super::form::read_multipart;
use crate::errors::HotelError;
use crate::models::{DeleteMediaQuery, DeleteMediaResponse, ResourceType, UploadResponse};
use crate::services::MediaGateway;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/upload
/// Upload one image or video
///
/// DOCUMENTATION: Multipart body with a `file` part. Type and size are checked
/// before the media host is contacted.
pub async fn upload_media(
    gateway: web::Data<MediaGateway>,
    payload: Multipart,
) -> Result<impl Responder, HotelError> {
    let form = read_multipart(payload, gateway.policy().max_upload_bytes).await?;

    let file = form
        .file
        .ok_or_else(|| HotelError::ValidationError("No file provided".to_string()))?;

    log::info!(
        "Upload requested: {} ({} bytes, {})",
        file.file_name.as_deref().unwrap_or("unnamed"),
        file.size(),
        file.content_type.as_deref().unwrap_or("no content type")
    );

    let media = gateway.upload(file).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        media,
        success: true,
    }))
}

/// DELETE /api/upload?publicId=...&resourceType=image|video
/// Delete one hosted asset
pub async fn delete_media(
    gateway: web::Data<MediaGateway>,
    query: web::Query<DeleteMediaQuery>,
) -> Result<impl Responder, HotelError> {
    let query = query.into_inner();

    let public_id = query
        .public_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| HotelError::ValidationError("Public ID is required".to_string()))?;

    let resource_type = match query.resource_type.as_deref() {
        None | Some("") => ResourceType::Image,
        Some(raw) => raw.parse().map_err(HotelError::ValidationError)?,
    };

    gateway.delete(&public_id, resource_type).await?;

    Ok(HttpResponse::Ok().json(DeleteMediaResponse {
        success: true,
        message: "File deleted successfully".to_string(),
        public_id,
    }))
}

/// Configuration for upload routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/upload")
            .route(web::post().to(upload_media))
            .route(web::delete().to(delete_media)),
    );
}
