// src/services/media_gateway.rs
// DOCUMENTATION: Upload and deletion gateways in front of the media host
// PURPOSE: Validate before any outbound call, then normalize host results

use crate::config::UploadPolicy;
use crate::errors::HotelError;
use crate::models::{BulkDeleteReport, MediaDescriptor, ResourceType, UploadedFile};
use crate::services::media_host::{HostUpload, MediaHost};
use crate::services::media_urls::determine_resource_type;
use futures_util::future::join_all;
use std::sync::Arc;

/// Sentinel the host returns for a completed deletion
const DESTROY_OK: &str = "ok";

/// Media upload/deletion gateway
/// DOCUMENTATION: Shared across workers via web::Data; holds no mutable state
#[derive(Clone)]
pub struct MediaGateway {
    host: Arc<dyn MediaHost>,
    policy: UploadPolicy,
}

impl MediaGateway {
    pub fn new(host: Arc<dyn MediaHost>, policy: UploadPolicy) -> Self {
        Self { host, policy }
    }

    pub fn policy(&self) -> UploadPolicy {
        self.policy
    }

    /// Check an upload against the type and size policy
    /// DOCUMENTATION: Runs before the host is contacted
    pub fn validate_upload(&self, file: &UploadedFile) -> Result<ResourceType, HotelError> {
        let resource_type = file.resource_type().ok_or_else(|| {
            HotelError::ValidationError("Only image and video files are allowed".to_string())
        })?;

        if resource_type == ResourceType::Video && file.size() > self.policy.max_video_bytes {
            log::warn!(
                "Rejected video upload of {} bytes (limit {})",
                file.size(),
                self.policy.max_video_bytes
            );
            return Err(HotelError::ValidationError(
                "Video file too large. Please ensure video is under 60 seconds.".to_string(),
            ));
        }

        Ok(resource_type)
    }

    /// Validate and forward a file to the media host
    pub async fn upload(&self, file: UploadedFile) -> Result<MediaDescriptor, HotelError> {
        let resource_type = self.validate_upload(&file)?;
        let descriptor = self.host.upload(HostUpload::new(file, resource_type)).await?;

        if descriptor.secure_url.is_empty() || descriptor.public_id.is_empty() {
            return Err(HotelError::upstream(
                "Upload failed. Please check your Cloudinary configuration.",
                "Upload failed - no result",
            ));
        }

        Ok(descriptor)
    }

    /// Delete one asset
    /// DOCUMENTATION: "ok" is success; any other sentinel is a DeleteRejected
    /// carrying the raw result
    pub async fn delete(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), HotelError> {
        let result = self.host.destroy(public_id, resource_type).await?;

        if result == DESTROY_OK {
            log::info!("Deleted {} {}", resource_type, public_id);
            Ok(())
        } else {
            log::warn!("Cloudinary refused to delete {}: {}", public_id, result);
            Err(HotelError::DeleteRejected { result })
        }
    }

    /// Delete one asset, guessing the resource type when no hint is given
    pub async fn delete_with_hint(
        &self,
        public_id: &str,
        hint: Option<ResourceType>,
    ) -> Result<(), HotelError> {
        let resource_type = hint.unwrap_or_else(|| determine_resource_type(public_id));
        self.delete(public_id, resource_type).await
    }

    /// Delete many assets concurrently
    /// DOCUMENTATION: Failures are counted, never propagated
    pub async fn bulk_delete(
        &self,
        public_ids: &[String],
        hint: Option<ResourceType>,
    ) -> BulkDeleteReport {
        let outcomes = join_all(
            public_ids
                .iter()
                .map(|public_id| self.delete_with_hint(public_id, hint)),
        )
        .await;

        let mut report = BulkDeleteReport {
            total: public_ids.len(),
            ..Default::default()
        };

        for (public_id, outcome) in public_ids.iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.successes += 1,
                Err(e) => {
                    log::error!("Cloudinary deletion error for {}: {}", public_id, e);
                    report.failures += 1;
                    report.failed_ids.push(public_id.clone());
                }
            }
        }

        log::info!(
            "Cloudinary bulk deletion: {} successful, {} failed",
            report.successes,
            report.failures
        );

        report
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory media host that records calls
    #[derive(Default)]
    pub struct FakeHost {
        pub uploads: AtomicUsize,
        pub destroys: Mutex<Vec<(String, ResourceType)>>,
        /// Ids that exist and may be destroyed
        pub stored: Mutex<HashSet<String>>,
        /// When set, upload replies carry an empty secure_url
        pub blank_reply: bool,
    }

    impl FakeHost {
        pub fn with_stored(ids: &[&str]) -> Self {
            let host = FakeHost::default();
            host.stored
                .lock()
                .unwrap()
                .extend(ids.iter().map(|id| id.to_string()));
            host
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl MediaHost for FakeHost {
        async fn upload(&self, upload: HostUpload) -> Result<MediaDescriptor, HotelError> {
            let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
            let public_id = format!("dolly-hotel/asset-{}", n);
            self.stored.lock().unwrap().insert(public_id.clone());

            let secure_url = if self.blank_reply {
                String::new()
            } else {
                format!(
                    "https://res.cloudinary.com/test/{}/upload/v1/{}.bin",
                    upload.resource_type, public_id
                )
            };

            Ok(MediaDescriptor {
                secure_url,
                public_id,
                resource_type: upload.resource_type,
                format: "bin".to_string(),
                width: 1200,
                height: 800,
                bytes: upload.file.data.len() as u64,
            })
        }

        async fn destroy(
            &self,
            public_id: &str,
            resource_type: ResourceType,
        ) -> Result<String, HotelError> {
            self.destroys
                .lock()
                .unwrap()
                .push((public_id.to_string(), resource_type));

            if self.stored.lock().unwrap().remove(public_id) {
                Ok("ok".to_string())
            } else {
                Ok("not found".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeHost;
    use super::*;

    fn file(content_type: &str, size: usize) -> UploadedFile {
        UploadedFile {
            file_name: Some("f".to_string()),
            content_type: Some(content_type.to_string()),
            data: vec![0; size],
        }
    }

    fn gateway(host: Arc<FakeHost>, max_video_bytes: usize) -> MediaGateway {
        MediaGateway::new(
            host,
            UploadPolicy {
                max_video_bytes,
                max_upload_bytes: max_video_bytes * 2,
            },
        )
    }

    #[tokio::test]
    async fn test_non_media_upload_never_reaches_host() {
        let host = Arc::new(FakeHost::default());
        let gateway = gateway(host.clone(), 100);

        let err = gateway.upload(file("application/pdf", 10)).await.unwrap_err();
        assert!(matches!(err, HotelError::ValidationError(_)));
        assert_eq!(host.upload_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_video_rejected() {
        let host = Arc::new(FakeHost::default());
        let gateway = gateway(host.clone(), 100);

        let err = gateway.upload(file("video/mp4", 101)).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Video file too large. Please ensure video is under 60 seconds."
        );
        assert_eq!(host.upload_count(), 0);

        // Images are not held to the video threshold
        assert!(gateway.upload(file("image/jpeg", 101)).await.is_ok());
    }

    #[tokio::test]
    async fn test_upload_returns_descriptor() {
        let host = Arc::new(FakeHost::default());
        let gateway = gateway(host.clone(), 100);

        let descriptor = gateway.upload(file("video/mp4", 100)).await.unwrap();
        assert!(!descriptor.secure_url.is_empty());
        assert!(!descriptor.public_id.is_empty());
        assert_eq!(descriptor.resource_type, ResourceType::Video);
        assert_eq!(descriptor.bytes, 100);
    }

    #[tokio::test]
    async fn test_blank_host_reply_is_upstream_error() {
        let host = Arc::new(FakeHost {
            blank_reply: true,
            ..Default::default()
        });
        let gateway = gateway(host, 100);

        let err = gateway.upload(file("image/png", 1)).await.unwrap_err();
        assert!(matches!(err, HotelError::UpstreamError { .. }));
    }

    #[tokio::test]
    async fn test_delete_not_found_is_rejected() {
        let host = Arc::new(FakeHost::default());
        let gateway = gateway(host, 100);

        match gateway.delete("missing", ResourceType::Image).await {
            Err(HotelError::DeleteRejected { result }) => assert_eq!(result, "not found"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_with_hint_infers_video() {
        let host = Arc::new(FakeHost::with_stored(&["dolly-hotel/tour.mp4"]));
        let gateway = gateway(host.clone(), 100);

        tokio_test::assert_ok!(gateway.delete_with_hint("dolly-hotel/tour.mp4", None).await);
        assert_eq!(
            host.destroys.lock().unwrap()[0],
            ("dolly-hotel/tour.mp4".to_string(), ResourceType::Video)
        );
    }

    #[tokio::test]
    async fn test_bulk_delete_counts_failures() {
        let host = Arc::new(FakeHost::with_stored(&["a", "b"]));
        let gateway = gateway(host, 100);

        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let report = gateway.bulk_delete(&ids, Some(ResourceType::Image)).await;

        assert_eq!(report.total, 3);
        assert_eq!(report.successes, 2);
        assert_eq!(report.failures, 1);
        assert_eq!(report.failed_ids, vec!["c".to_string()]);
    }
}
