use thiserror::Error;

/// Errors raised while uploading an image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image is not valid base64: {0}")]
    InvalidEncoding(String),
    #[error("Object storage failed: {0}")]
    Storage(String),
}
