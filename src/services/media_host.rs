// src/services/media_host.rs
// DOCUMENTATION: Seam between the gateways and the external media host
// PURPOSE: Lets handlers run against Cloudinary, or against nothing when unconfigured

use crate::errors::HotelError;
use crate::models::{MediaDescriptor, ResourceType, UploadedFile};

/// Server-side transformation requested for every stored image
pub const IMAGE_TRANSFORMATION: &str = "c_limit,w_1200,h_800,q_auto";

/// Server-side transformation for video: 720p cap, 60 second duration cap
pub const VIDEO_TRANSFORMATION: &str = "c_limit,w_1280,h_720,q_auto,du_60";

/// An upload as handed to the media host
#[derive(Debug, Clone)]
pub struct HostUpload {
    pub file: UploadedFile,
    pub resource_type: ResourceType,
    pub transformation: &'static str,
}

impl HostUpload {
    pub fn new(file: UploadedFile, resource_type: ResourceType) -> Self {
        let transformation = match resource_type {
            ResourceType::Image => IMAGE_TRANSFORMATION,
            ResourceType::Video => VIDEO_TRANSFORMATION,
        };

        Self {
            file,
            resource_type,
            transformation,
        }
    }
}

/// External media host operations
#[async_trait::async_trait]
pub trait MediaHost: Send + Sync {
    /// Store a file and describe the stored asset
    async fn upload(&self, upload: HostUpload) -> Result<MediaDescriptor, HotelError>;

    /// Request deletion; returns the host's raw result sentinel ("ok", "not found", ...)
    async fn destroy(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<String, HotelError>;
}

/// Stand-in used when credentials are missing at startup
/// Every call fails with the configuration error, without touching the network
pub struct UnconfiguredHost {
    missing: Vec<String>,
}

impl UnconfiguredHost {
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }

    fn error(&self) -> HotelError {
        log::error!("Cloudinary env missing: {}", self.missing.join(", "));
        HotelError::ConfigurationError(self.missing.clone())
    }
}

#[async_trait::async_trait]
impl MediaHost for UnconfiguredHost {
    async fn upload(&self, _upload: HostUpload) -> Result<MediaDescriptor, HotelError> {
        Err(self.error())
    }

    async fn destroy(
        &self,
        _public_id: &str,
        _resource_type: ResourceType,
    ) -> Result<String, HotelError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformation_follows_resource_type() {
        let file = UploadedFile {
            file_name: None,
            content_type: Some("video/mp4".into()),
            data: vec![0; 4],
        };
        assert_eq!(
            HostUpload::new(file.clone(), ResourceType::Video).transformation,
            VIDEO_TRANSFORMATION
        );
        assert_eq!(
            HostUpload::new(file, ResourceType::Image).transformation,
            IMAGE_TRANSFORMATION
        );
    }

    #[tokio::test]
    async fn test_unconfigured_host_reports_missing() {
        let host = UnconfiguredHost::new(vec!["CLOUDINARY_API_SECRET".into()]);
        match host.destroy("x", ResourceType::Image).await {
            Err(HotelError::ConfigurationError(missing)) => {
                assert_eq!(missing, vec!["CLOUDINARY_API_SECRET"])
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
