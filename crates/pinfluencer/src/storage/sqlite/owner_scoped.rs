//! Brand-owned access on top of [`Table`].
//!
//! The owner is the brand row of the caller's auth identity. A row owned by
//! another brand is reported exactly like a missing one.

use std::sync::Arc;

use pinfluencer_core::image::ImageRepository;
use pinfluencer_core::storage::Result;

use super::entities::BrandEntity;
use super::table::{not_found, Entity, ImageField, OwnedEntity, Table};

pub struct OwnerScoped<E> {
    table: Table<E>,
    brands: Table<BrandEntity>,
    images: Arc<dyn ImageRepository>,
}

impl<E: OwnedEntity> OwnerScoped<E> {
    pub fn new(table: Table<E>, brands: Table<BrandEntity>, images: Arc<dyn ImageRepository>) -> Self {
        Self {
            table,
            brands,
            images,
        }
    }

    pub fn table(&self) -> &Table<E> {
        &self.table
    }

    /// Resolves the brand id of `auth_user_id`. `NotFound` if the caller has no brand.
    async fn resolve_owner(&self, auth_user_id: &str) -> Result<String> {
        let brand = self.brands.find_one("auth_user_id", auth_user_id).await?;
        Ok(brand.id)
    }

    /// Finds row `id` if it belongs to `owner_id`.
    async fn find_owned(&self, owner_id: &str, id: &str) -> Result<E> {
        let entity = self.table.find_one("id", id).await?;
        if entity.owner_id() != owner_id {
            tracing::debug!(
                entity = E::ENTITY_TYPE,
                id,
                owner_id,
                "Record belongs to another owner"
            );
            return Err(not_found::<E>(id));
        }
        Ok(entity)
    }

    /// Lists the rows owned by `owner_id`, in insertion order.
    pub async fn load_for_owner(&self, owner_id: &str) -> Result<Vec<E::Model>> {
        self.table
            .find_all(E::OWNER_COLUMN, owner_id)
            .await?
            .into_iter()
            .map(E::into_model)
            .collect()
    }

    pub async fn load_for_auth_owner(&self, auth_user_id: &str) -> Result<Vec<E::Model>> {
        let owner_id = self.resolve_owner(auth_user_id).await?;
        self.load_for_owner(&owner_id).await
    }

    pub async fn load_by_id_for_auth_owner(&self, auth_user_id: &str, id: &str) -> Result<E::Model> {
        let owner_id = self.resolve_owner(auth_user_id).await?;
        self.find_owned(&owner_id, id).await?.into_model()
    }

    /// Inserts `payload` owned by the caller's brand.
    pub async fn write_new_for_auth_owner(
        &self,
        auth_user_id: &str,
        payload: E::Model,
    ) -> Result<E::Model> {
        let owner_id = self.resolve_owner(auth_user_id).await?;

        let mut entity = E::from_model(&payload)?;
        entity.set_owner_id(owner_id);

        self.table.insert(entity).await?.into_model()
    }

    /// Applies `apply` to owned row `id` and saves every field. Ownership is kept.
    pub async fn update_for_auth_owner<F>(
        &self,
        auth_user_id: &str,
        id: &str,
        apply: F,
    ) -> Result<E::Model>
    where
        F: FnOnce(&mut E::Model) + Send,
    {
        let owner_id = self.resolve_owner(auth_user_id).await?;
        let mut model = self.find_owned(&owner_id, id).await?.into_model()?;
        apply(&mut model);

        let mut entity = E::from_model(&model)?;
        entity.set_owner_id(owner_id);

        self.table.save(entity).await?.into_model()
    }

    pub async fn delete_for_auth_owner(&self, auth_user_id: &str, id: &str) -> Result<()> {
        let owner_id = self.resolve_owner(auth_user_id).await?;
        self.find_owned(&owner_id, id).await?;
        self.table.delete(id).await
    }

    /// Uploads an image for owned row `id` and stores its key in `field`.
    pub async fn update_image_for_auth_owner<F: ImageField>(
        &self,
        auth_user_id: &str,
        id: &str,
        image_base64: &str,
        field: F,
    ) -> Result<E::Model> {
        let owner_id = self.resolve_owner(auth_user_id).await?;
        self.find_owned(&owner_id, id).await?;

        let key = self.images.upload(id, image_base64).await?;
        tracing::info!(
            entity = E::ENTITY_TYPE,
            id,
            column = field.column(),
            key = %key,
            "Setting image"
        );

        self.table.set_image(id, field, key).await?;

        self.find_owned(&owner_id, id).await?.into_model()
    }
}
