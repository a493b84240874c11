use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use super::ImageError;

/// Tag set attached to every uploaded image.
pub const PUBLIC_TAGGING: &str = "public=yes";

/// Format assumed when the byte signature is not recognised.
pub const DEFAULT_IMAGE_FORMAT: ImageFormat = ImageFormat {
    mime_type: "image/jpg",
    extension: "jpg",
};

/// Content type and file extension of an uploaded blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFormat {
    pub mime_type: &'static str,
    pub extension: &'static str,
}

/// Decodes a standard base64 payload. Surrounding whitespace is ignored.
pub fn decode_image(image_base64: &str) -> Result<Vec<u8>, ImageError> {
    STANDARD
        .decode(image_base64.trim())
        .map_err(|e| ImageError::InvalidEncoding(e.to_string()))
}

/// Detects the format of `bytes` from its signature, falling back to
/// [`DEFAULT_IMAGE_FORMAT`].
pub fn detect_format(bytes: &[u8]) -> ImageFormat {
    infer::get(bytes)
        .map(|kind| ImageFormat {
            mime_type: kind.mime_type(),
            extension: kind.extension(),
        })
        .unwrap_or(DEFAULT_IMAGE_FORMAT)
}

/// Composes `{path}/{id}.{extension}`.
pub fn storage_key(path: &str, id: Uuid, format: &ImageFormat) -> String {
    format!("{}/{}.{}", path, id, format.extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 16] = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];

    #[test]
    fn test_decode_valid_base64() {
        let encoded = STANDARD.encode(b"hello");
        assert_eq!(decode_image(&encoded).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_ignores_surrounding_whitespace() {
        let encoded = format!("  {}\n", STANDARD.encode(b"hello"));
        assert_eq!(decode_image(&encoded).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_invalid_base64() {
        let result = decode_image("not base64!!");
        assert!(matches!(result, Err(ImageError::InvalidEncoding(_))));
    }

    #[test]
    fn test_detect_png() {
        let format = detect_format(&PNG_SIGNATURE);
        assert_eq!(format.mime_type, "image/png");
        assert_eq!(format.extension, "png");
    }

    #[test]
    fn test_detect_jpeg() {
        let format = detect_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]);
        assert_eq!(format.mime_type, "image/jpeg");
        assert_eq!(format.extension, "jpg");
    }

    #[test]
    fn test_unknown_signature_uses_default() {
        assert_eq!(detect_format(b"plain text"), DEFAULT_IMAGE_FORMAT);
        assert_eq!(detect_format(&[]), DEFAULT_IMAGE_FORMAT);
    }

    #[test]
    fn test_storage_key_layout() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let key = storage_key("brand-1", id, &DEFAULT_IMAGE_FORMAT);
        assert_eq!(key, "brand-1/550e8400-e29b-41d4-a716-446655440000.jpg");
    }
}
