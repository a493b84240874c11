use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use pinfluencer_core::image::{
    decode_image, detect_format, storage_key, ImageError, ImageRepository, ObjectStore, PutObject,
    PUBLIC_TAGGING,
};

/// Uploads decoded images to a bucket of an [`ObjectStore`].
pub struct ObjectStoreImageRepository {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectStoreImageRepository {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ImageRepository for ObjectStoreImageRepository {
    async fn upload(&self, path: &str, image_base64: &str) -> Result<String, ImageError> {
        let body = decode_image(image_base64)?;
        let format = detect_format(&body);
        let key = storage_key(path, Uuid::new_v4(), &format);

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            content_type = format.mime_type,
            size = body.len(),
            "Uploading image"
        );

        self.store
            .put(PutObject {
                bucket: self.bucket.clone(),
                key: key.clone(),
                body,
                content_type: format.mime_type.to_string(),
                tagging: PUBLIC_TAGGING.to_string(),
            })
            .await
            .inspect_err(|e| tracing::error!(key = %key, error = %e, "Image upload failed"))?;

        Ok(key)
    }
}
