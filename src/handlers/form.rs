// src/handlers/form.rs
// DOCUMENTATION: Multipart body reader shared by the upload and gallery handlers
// PURPOSE: Buffer one file part plus text fields, enforcing a total size cap

use crate::errors::HotelError;
use crate::models::UploadedFile;
use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

/// Name of the multipart part carrying the file
pub const FILE_FIELD: &str = "file";

/// A fully read multipart form
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl MultipartForm {
    /// Text field by name
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

/// Read every part of a multipart body
/// DOCUMENTATION: Fails with a 400 as soon as the running total passes `limit`;
/// only the first `file` part is kept
pub async fn read_multipart(
    mut payload: Multipart,
    limit: usize,
) -> Result<MultipartForm, HotelError> {
    let mut form = MultipartForm::default();
    let mut total = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            HotelError::ValidationError(format!("Invalid multipart body: {}", e))
        })?;

        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                HotelError::ValidationError(format!("Invalid multipart body: {}", e))
            })?;

            total += chunk.len();
            if total > limit {
                log::warn!("Multipart body exceeded {} bytes", limit);
                return Err(HotelError::ValidationError(format!(
                    "Upload exceeds the maximum size of {} bytes",
                    limit
                )));
            }
            data.extend_from_slice(&chunk);
        }

        if name == FILE_FIELD {
            if form.file.is_none() {
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
        } else if !name.is_empty() {
            form.fields
                .insert(name, String::from_utf8_lossy(&data).into_owned());
        }
    }

    Ok(form)
}
