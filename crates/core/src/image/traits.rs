use async_trait::async_trait;

use super::ImageError;

/// A single object write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
    /// URL-encoded tag set, e.g. `public=yes`.
    pub tagging: String,
}

/// Key-based blob storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores an object, replacing any object with the same key.
    async fn put(&self, object: PutObject) -> Result<(), ImageError>;
}

/// Uploads base64-encoded images and returns their storage keys.
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Uploads an image under `path` and returns the generated storage key.
    async fn upload(&self, path: &str, image_base64: &str) -> Result<String, ImageError>;
}
