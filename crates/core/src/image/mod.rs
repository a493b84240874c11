//! Image upload building blocks.
//!
//! Decoding, content sniffing and key generation are pure functions here; the
//! upload itself goes through an [`ObjectStore`] provided by the I/O shell.

mod error;
mod sniff;
mod traits;

pub use error::ImageError;
pub use sniff::{
    decode_image, detect_format, storage_key, ImageFormat, DEFAULT_IMAGE_FORMAT, PUBLIC_TAGGING,
};
pub use traits::{ImageRepository, ObjectStore, PutObject};
