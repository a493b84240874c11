//! Application state with repository-based storage.
//!
//! Holds the repository trait objects every processor works against, plus
//! the database handle so it can be closed on shutdown.

use std::sync::Arc;

use pinfluencer_core::image::{ImageRepository, ObjectStore};
use pinfluencer_core::storage::{
    BrandRepository, CampaignRepository, InfluencerRepository, ProductRepository,
};

use crate::config::Config;
use crate::images::{InMemoryObjectStore, ObjectStoreImageRepository};
use crate::storage::sqlite::{
    Database, SqliteBrandRepository, SqliteCampaignRepository, SqliteInfluencerRepository,
    SqliteProductRepository,
};

/// Shared application state.
///
/// Cloned for each request; the repositories share one SQLite connection and
/// one image repository.
#[derive(Clone)]
pub struct AppState {
    pub brands: Arc<dyn BrandRepository>,
    pub influencers: Arc<dyn InfluencerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    database: Database,
}

impl AppState {
    /// Wires every repository to `database` and `store`.
    pub fn build(database: Database, store: Arc<dyn ObjectStore>, bucket: &str) -> Self {
        let images: Arc<dyn ImageRepository> =
            Arc::new(ObjectStoreImageRepository::new(store, bucket));

        Self {
            brands: Arc::new(SqliteBrandRepository::new(&database, images.clone())),
            influencers: Arc::new(SqliteInfluencerRepository::new(&database, images.clone())),
            products: Arc::new(SqliteProductRepository::new(&database, images.clone())),
            campaigns: Arc::new(SqliteCampaignRepository::new(&database, images)),
            database,
        }
    }

    /// Opens the configured database and object store.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        if config.in_memory {
            tracing::info!("Using in-memory database and image store");
            let database = Database::open_in_memory().await?;
            let store = Arc::new(InMemoryObjectStore::new());
            return Ok(Self::build(database, store, &config.image_bucket));
        }

        tracing::info!(path = %config.sqlite_path, "Opening SQLite database");
        let database = Database::open(&config.sqlite_path).await?;
        let store = object_store().await;

        Ok(Self::build(database, store, &config.image_bucket))
    }

    /// State backed entirely by memory.
    pub async fn in_memory() -> Result<Self, anyhow::Error> {
        let database = Database::open_in_memory().await?;
        let store = Arc::new(InMemoryObjectStore::new());
        Ok(Self::build(database, store, "pinfluencer-test"))
    }

    /// Closes the database connection.
    pub async fn close(self) -> Result<(), anyhow::Error> {
        self.database.close().await?;
        Ok(())
    }
}

#[cfg(feature = "s3")]
async fn object_store() -> Arc<dyn ObjectStore> {
    tracing::info!("Using S3 image store");
    Arc::new(crate::images::S3ObjectStore::from_env().await)
}

#[cfg(not(feature = "s3"))]
async fn object_store() -> Arc<dyn ObjectStore> {
    tracing::warn!("Built without the s3 feature, images are kept in memory");
    Arc::new(InMemoryObjectStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_config_starts_empty() {
        let config = Config {
            sqlite_path: "unused.db".to_string(),
            image_bucket: "bucket".to_string(),
            in_memory: true,
            log_json: false,
        };

        let state = AppState::new(&config).await.unwrap();

        assert!(state.brands.load_collection().await.unwrap().is_empty());
        assert!(state.campaigns.load_collection().await.unwrap().is_empty());
        state.close().await.unwrap();
    }
}
