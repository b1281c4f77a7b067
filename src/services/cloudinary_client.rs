// src/services/cloudinary_client.rs
// DOCUMENTATION: Cloudinary Upload API client
// PURPOSE: Signed upload and destroy calls against the media host

use crate::config::MediaHostConfig;
use crate::errors::HotelError;
use crate::models::{MediaDescriptor, ResourceType};
use crate::services::media_host::{HostUpload, MediaHost};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Cloudinary API client
/// DOCUMENTATION: Holds credentials from an already validated MediaHostConfig
pub struct CloudinaryClient {
    /// HTTP client for making requests
    client: Client,
    config: MediaHostConfig,
}

/// Reply of the upload endpoint
/// DOCUMENTATION: Only the fields the gateway normalizes; the host sends many more
#[derive(Debug, Deserialize)]
struct UploadReply {
    secure_url: Option<String>,
    public_id: Option<String>,
    resource_type: Option<String>,
    format: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    bytes: Option<u64>,
}

/// Reply of the destroy endpoint
#[derive(Debug, Deserialize)]
struct DestroyReply {
    result: String,
}

/// Error envelope the host uses for non-2xx replies
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

impl CloudinaryClient {
    /// Create new Cloudinary client
    pub fn new(config: MediaHostConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Endpoint URL, e.g. `{base}/{cloud}/image/upload`
    fn endpoint(&self, resource_type: ResourceType, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name,
            resource_type.as_str(),
            action
        )
    }

    /// Sign request parameters
    /// DOCUMENTATION: Parameters sorted by name, joined as `k=v` with `&`,
    /// secret appended, SHA-256 hex digest. Callers leave out `file`,
    /// `api_key` and `resource_type`, which the host excludes from signing.
    pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
        let mut sorted: Vec<&(&str, String)> =
            params.iter().filter(|(_, value)| !value.is_empty()).collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());

        hex::encode(hasher.finalize())
    }

    fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }

    /// Read a non-2xx reply into an upstream error
    async fn upstream_failure(message: &str, response: reqwest::Response) -> HotelError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorReply>(&body)
            .map(|reply| reply.error.message)
            .unwrap_or(body);

        log::error!("Cloudinary error {}: {}", status, detail);
        HotelError::upstream(message, format!("{}: {}", status, detail))
    }
}

#[async_trait::async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, upload: HostUpload) -> Result<MediaDescriptor, HotelError> {
        const FAILED: &str = "Upload failed. Please check your Cloudinary configuration.";

        let signed = vec![
            ("folder", self.config.folder.clone()),
            ("timestamp", Self::timestamp()),
            ("transformation", upload.transformation.to_string()),
        ];
        let signature = Self::sign(&signed, &self.config.api_secret);

        let mut part = Part::bytes(upload.file.data)
            .file_name(upload.file.file_name.unwrap_or_else(|| "upload".to_string()));
        if let Some(content_type) = upload.file.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| HotelError::ValidationError(format!("Invalid content type: {}", e)))?;
        }

        let mut form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (key, value) in signed {
            form = form.text(key, value);
        }
        let form = form.part("file", part);

        let url = self.endpoint(upload.resource_type, "upload");
        log::debug!("Cloudinary upload: {} to {}", upload.resource_type, url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::error!("Cloudinary upload request failed: {}", e);
                HotelError::upstream(FAILED, e)
            })?;

        if !response.status().is_success() {
            return Err(Self::upstream_failure(FAILED, response).await);
        }

        let reply: UploadReply = response.json().await.map_err(|e| {
            log::error!("Failed to parse Cloudinary upload reply: {}", e);
            HotelError::upstream(FAILED, format!("Parse error: {}", e))
        })?;

        let resource_type = reply
            .resource_type
            .as_deref()
            .and_then(|rt| rt.parse().ok())
            .unwrap_or(upload.resource_type);

        match (reply.secure_url, reply.public_id) {
            (Some(secure_url), Some(public_id))
                if !secure_url.is_empty() && !public_id.is_empty() =>
            {
                log::info!("Uploaded {} {} ({} bytes)", resource_type, public_id, reply.bytes.unwrap_or(0));
                Ok(MediaDescriptor {
                    secure_url,
                    public_id,
                    resource_type,
                    format: reply.format.unwrap_or_default(),
                    width: reply.width.unwrap_or(0),
                    height: reply.height.unwrap_or(0),
                    bytes: reply.bytes.unwrap_or(0),
                })
            }
            _ => {
                log::error!("Cloudinary upload reply without secure_url/public_id");
                Err(HotelError::upstream(FAILED, "Upload failed - no result"))
            }
        }
    }

    async fn destroy(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<String, HotelError> {
        const FAILED: &str = "Delete failed. Please check your Cloudinary configuration.";

        let signed = vec![
            ("public_id", public_id.to_string()),
            ("timestamp", Self::timestamp()),
        ];
        let signature = Self::sign(&signed, &self.config.api_secret);

        let mut params = signed;
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature", signature));

        let url = self.endpoint(resource_type, "destroy");
        log::debug!("Cloudinary destroy: {} ({})", public_id, resource_type);

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Cloudinary destroy request failed: {}", e);
                HotelError::upstream(FAILED, e)
            })?;

        if !response.status().is_success() {
            return Err(Self::upstream_failure(FAILED, response).await);
        }

        let reply: DestroyReply = response
            .json()
            .await
            .map_err(|e| HotelError::upstream(FAILED, format!("Parse error: {}", e)))?;

        Ok(reply.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaHostConfig {
        MediaHostConfig {
            cloud_name: "dolly".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            folder: "dolly-hotel".to_string(),
            api_base: "https://api.cloudinary.com/v1_1/".to_string(),
        }
    }

    #[test]
    fn test_endpoint() {
        let client = CloudinaryClient::new(test_config());
        assert_eq!(
            client.endpoint(ResourceType::Video, "destroy"),
            "https://api.cloudinary.com/v1_1/dolly/video/destroy"
        );
    }

    #[test]
    fn test_signature_sorts_params() {
        let a = CloudinaryClient::sign(
            &[
                ("timestamp", "1315060510".to_string()),
                ("public_id", "sample".to_string()),
            ],
            "abcd",
        );
        let b = CloudinaryClient::sign(
            &[
                ("public_id", "sample".to_string()),
                ("timestamp", "1315060510".to_string()),
            ],
            "abcd",
        );

        assert_eq!(a, b);
        assert_eq!(
            a,
            "0d4fe14b2b4a3f68a97ccc5097c43908b623d24293c296826a9390c14d891509"
        );
    }

    #[test]
    fn test_signature_matches_sha256_of_joined_params() {
        let signature = CloudinaryClient::sign(
            &[
                ("timestamp", "1".to_string()),
                ("folder", "f".to_string()),
                ("empty", String::new()),
            ],
            "s",
        );

        let mut hasher = Sha256::new();
        hasher.update(b"folder=f&timestamp=1s");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(signature, expected);
    }
}
