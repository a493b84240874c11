//! Image uploads and the object stores behind them.

mod memory;
mod repository;
#[cfg(feature = "s3")]
mod s3;

pub use memory::InMemoryObjectStore;
pub use repository::ObjectStoreImageRepository;
#[cfg(feature = "s3")]
pub use s3::S3ObjectStore;
