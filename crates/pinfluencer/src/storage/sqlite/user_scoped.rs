//! One-record-per-identity access on top of [`Table`].

use std::sync::Arc;

use pinfluencer_core::image::ImageRepository;
use pinfluencer_core::storage::{RepositoryError, Result};

use super::table::{Entity, ImageField, Table, UserEntity};

/// Wraps a table whose rows belong to exactly one auth identity each.
pub struct UserScoped<E> {
    table: Table<E>,
    images: Arc<dyn ImageRepository>,
}

impl<E: UserEntity> UserScoped<E> {
    pub fn new(table: Table<E>, images: Arc<dyn ImageRepository>) -> Self {
        Self { table, images }
    }

    pub fn table(&self) -> &Table<E> {
        &self.table
    }

    /// Gets the row of `auth_user_id`. Fails with `NotFound` when absent.
    pub async fn load_for_auth_user(&self, auth_user_id: &str) -> Result<E::Model> {
        self.table
            .find_one("auth_user_id", auth_user_id)
            .await?
            .into_model()
    }

    /// Creates the row of `auth_user_id` from `payload`.
    ///
    /// An existing row fails with `AlreadyExists`. A `NotFound` lookup means
    /// there is no conflict; any other lookup error is returned as is.
    pub async fn write_new_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: E::Model,
    ) -> Result<E::Model> {
        match self.table.find_one("auth_user_id", auth_user_id).await {
            Ok(existing) => {
                tracing::debug!(
                    entity = E::ENTITY_TYPE,
                    id = existing.id(),
                    auth_user_id,
                    "Identity already has a record"
                );
                return Err(RepositoryError::AlreadyExists {
                    entity_type: E::ENTITY_TYPE,
                    id: existing.id().to_string(),
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let mut entity = E::from_model(&payload)?;
        entity.set_auth_user_id(auth_user_id.to_string());

        let entity = self.table.insert(entity).await.inspect_err(|e| {
            tracing::warn!(entity = E::ENTITY_TYPE, auth_user_id, error = %e, "Failed to write new record");
        })?;

        entity.into_model()
    }

    /// Applies `apply` to the model of `auth_user_id` and saves every field.
    pub async fn update_for_auth_user<F>(&self, auth_user_id: &str, apply: F) -> Result<E::Model>
    where
        F: FnOnce(&mut E::Model) + Send,
    {
        let entity = self.table.find_one("auth_user_id", auth_user_id).await?;
        let mut model = entity.into_model()?;
        apply(&mut model);

        let mut entity = E::from_model(&model)?;
        entity.set_auth_user_id(auth_user_id.to_string());

        self.table.save(entity).await?.into_model()
    }

    /// Uploads an image for the row of `auth_user_id` and stores its key in `field`.
    ///
    /// The row must exist before anything is uploaded. The row id is the key
    /// prefix. The fresh row is re-read after the column is written.
    pub async fn update_image_for_auth_user<F: ImageField>(
        &self,
        auth_user_id: &str,
        image_base64: &str,
        field: F,
    ) -> Result<E::Model> {
        let entity = self.table.find_one("auth_user_id", auth_user_id).await?;
        let id = entity.id().to_string();

        let key = self.images.upload(&id, image_base64).await?;
        tracing::info!(
            entity = E::ENTITY_TYPE,
            id = %id,
            column = field.column(),
            key = %key,
            "Setting image"
        );

        self.table.set_image(&id, field, key).await?;

        self.load_for_auth_user(auth_user_id).await
    }
}

#[cfg(test)]
mod tests {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use pinfluencer_core::marketplace::{BrandRequest, CategoryTag, ValueTag};

    use super::*;
    use crate::images::{InMemoryObjectStore, ObjectStoreImageRepository};
    use crate::storage::sqlite::entities::{BrandEntity, BrandImage};
    use crate::storage::sqlite::Database;

    struct Fixture {
        repo: UserScoped<BrandEntity>,
        store: Arc<InMemoryObjectStore>,
    }

    async fn fixture() -> Fixture {
        let db = Database::open_in_memory().await.unwrap();
        let store = Arc::new(InMemoryObjectStore::new());
        let images = Arc::new(ObjectStoreImageRepository::new(store.clone(), "bucket"));
        Fixture {
            repo: UserScoped::new(Table::new(db.connection()), images),
            store,
        }
    }

    fn request(name: &str) -> BrandRequest {
        BrandRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            name: name.to_string(),
            description: "Engines".to_string(),
            website: "https://example.com".to_string(),
            instahandle: None,
            values: vec![ValueTag::Organic],
            categories: vec![CategoryTag::Fashion],
        }
    }

    #[tokio::test]
    async fn test_write_new_sets_identity() {
        let f = fixture().await;

        let brand = f
            .repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();

        assert_eq!(brand.auth_user_id, "auth-1");
        assert_eq!(f.repo.load_for_auth_user("auth-1").await.unwrap(), brand);
    }

    #[tokio::test]
    async fn test_double_write_is_already_exists_and_keeps_one_row() {
        let f = fixture().await;
        let first = f
            .repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();

        let second = f
            .repo
            .write_new_for_auth_user("auth-1", request("Two").into_brand())
            .await;

        assert_eq!(
            second,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Brand",
                id: first.id.clone()
            })
        );
        let all = f.repo.table().load_collection().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "One");
    }

    #[tokio::test]
    async fn test_load_for_missing_identity_is_not_found() {
        let f = fixture().await;

        let result = f.repo.load_for_auth_user("nobody").await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_images() {
        let f = fixture().await;
        let created = f
            .repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();
        f.repo
            .update_image_for_auth_user("auth-1", &STANDARD.encode(b"logo"), BrandImage::Logo)
            .await
            .unwrap();

        let updated = f
            .repo
            .update_for_auth_user("auth-1", |brand| {
                let mut update = request("Renamed");
                update.values = vec![];
                update.apply_to(brand)
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Renamed");
        assert!(updated.values.is_empty());
        assert!(updated.logo.is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_keeps_logo_committed_after_read() {
        let f = fixture().await;
        let brand = f
            .repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();
        let table = f.repo.table().clone();
        let id = brand.id.clone();

        let updated = f
            .repo
            .update_for_auth_user("auth-1", move |brand| {
                // Lands after the update has read the row.
                tokio::task::block_in_place(|| {
                    tokio::runtime::Handle::current().block_on(table.set_image(
                        &id,
                        BrandImage::Logo,
                        "logo-key.png".to_string(),
                    ))
                })
                .unwrap();
                brand.name = "Renamed".to_string();
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.logo.as_deref(), Some("logo-key.png"));
        let reloaded = f.repo.load_for_auth_user("auth-1").await.unwrap();
        assert_eq!(reloaded.logo.as_deref(), Some("logo-key.png"));
    }

    #[tokio::test]
    async fn test_update_missing_identity_is_not_found() {
        let f = fixture().await;

        let result = f.repo.update_for_auth_user("nobody", |_| {}).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_image_stores_key_in_selected_field() {
        let f = fixture().await;
        let brand = f
            .repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();

        let updated = f
            .repo
            .update_image_for_auth_user(
                "auth-1",
                &STANDARD.encode(b"header bytes"),
                BrandImage::HeaderImage,
            )
            .await
            .unwrap();

        let key = updated.header_image.unwrap();
        assert!(key.starts_with(&format!("{}/", brand.id)));
        assert!(key.ends_with(".jpg"));
        assert!(updated.logo.is_none());
        assert_eq!(f.store.keys().await, vec![key]);
    }

    #[tokio::test]
    async fn test_update_image_missing_identity_uploads_nothing() {
        let f = fixture().await;

        let result = f
            .repo
            .update_image_for_auth_user("nobody", &STANDARD.encode(b"x"), BrandImage::Logo)
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(f.store.put_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_image_storage_failure_leaves_row_untouched() {
        let f = fixture().await;
        f.repo
            .write_new_for_auth_user("auth-1", request("One").into_brand())
            .await
            .unwrap();
        f.store.set_failing(true);

        let result = f
            .repo
            .update_image_for_auth_user("auth-1", &STANDARD.encode(b"x"), BrandImage::Logo)
            .await;

        assert!(matches!(result, Err(RepositoryError::Image(_))));
        let brand = f.repo.load_for_auth_user("auth-1").await.unwrap();
        assert!(brand.logo.is_none());
    }
}
