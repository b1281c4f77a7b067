// src/handlers/admin.rs
// DOCUMENTATION: Admin gallery handlers
// PURPOSE: Token-protected list, create and delete of gallery images

use super::form::read_multipart;
use crate::config::Config;
use crate::errors::HotelError;
use crate::models::CreateGalleryImageRequest;
use crate::services::{GalleryService, GalleryUploadForm, MediaGateway};
use actix_multipart::Multipart;
use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt;
use serde_json::json;

/// Largest JSON descriptor accepted on POST /api/admin/gallery
const MAX_JSON_BYTES: usize = 64 * 1024;

/// GET /api/admin/gallery
/// List gallery images, newest first
pub async fn list_gallery(
    service: web::Data<GalleryService>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, HotelError> {
    verify_admin(&req, &config)?;

    let images = service.list().await?;
    log::debug!("Listing {} gallery images", images.len());

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": images,
    })))
}

/// POST /api/admin/gallery
/// Create a gallery image
///
/// DOCUMENTATION: `application/json` bodies describe media that is already
/// hosted; anything else is read as multipart and uploaded first
pub async fn create_gallery_image(
    service: web::Data<GalleryService>,
    gateway: web::Data<MediaGateway>,
    config: web::Data<Config>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<impl Responder, HotelError> {
    verify_admin(&req, &config)?;

    let is_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);

    let image = if is_json {
        let body = read_body(payload, MAX_JSON_BYTES).await?;
        let request: CreateGalleryImageRequest = serde_json::from_slice(&body)
            .map_err(|e| HotelError::ValidationError(format!("Invalid JSON body: {}", e)))?;
        service.create_from_descriptor(request).await?
    } else {
        let multipart = Multipart::new(req.headers(), payload);
        let form = read_multipart(multipart, gateway.policy().max_upload_bytes).await?;
        let category_id = form.text("categoryId");
        service
            .create_from_upload(GalleryUploadForm {
                category: form.text("category"),
                caption: form.text("caption"),
                category_id,
                file: form.file,
            })
            .await?
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": image,
    })))
}

/// DELETE /api/admin/gallery/{id}
/// Remove a gallery image and its hosted asset
pub async fn delete_gallery_image(
    service: web::Data<GalleryService>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> Result<impl Responder, HotelError> {
    verify_admin(&req, &config)?;

    let deletion = service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": deletion,
    })))
}

/// Helper function to verify admin authentication
/// DOCUMENTATION: Accepts `X-Admin-Token: <token>` or `Authorization: Bearer <token>`.
/// An unset ADMIN_TOKEN rejects every request.
fn verify_admin(req: &HttpRequest, config: &Config) -> Result<(), HotelError> {
    let headers = req.headers();

    let token = headers
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
        })
        .map(str::trim)
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            HotelError::Unauthorized
        })?;

    if config.admin_token.is_empty() || token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(HotelError::Unauthorized);
    }

    Ok(())
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, HotelError> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| HotelError::ValidationError(format!("Failed to read body: {}", e)))?;

        if body.len() + chunk.len() > limit {
            return Err(HotelError::ValidationError(
                "Request body too large".to_string(),
            ));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/gallery")
            .route("", web::get().to(list_gallery))
            .route("", web::post().to(create_gallery_image))
            .route("/{id}", web::delete().to(delete_gallery_image)),
    );
}
