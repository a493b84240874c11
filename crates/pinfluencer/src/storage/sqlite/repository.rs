//! SQLite repository implementations.
//!
//! Implements the repository traits from `pinfluencer_core::storage` by
//! composing the generic table with the user-scoped and owner-scoped wrappers.

use std::sync::Arc;

use async_trait::async_trait;

use pinfluencer_core::image::ImageRepository;
use pinfluencer_core::marketplace::{
    Brand, BrandRequest, Campaign, CampaignImageSlot, CampaignRequest, CampaignState, Influencer,
    InfluencerRequest, Product, ProductRequest,
};
use pinfluencer_core::storage::{
    BrandRepository, CampaignRepository, InfluencerRepository, ProductRepository, Result,
};

use super::entities::{
    BrandEntity, BrandImage, CampaignEntity, InfluencerEntity, InfluencerImage, ProductEntity,
    ProductImage,
};
use super::owner_scoped::OwnerScoped;
use super::table::Table;
use super::user_scoped::UserScoped;
use super::Database;

// ============================================================================
// BrandRepository implementation
// ============================================================================

pub struct SqliteBrandRepository {
    users: UserScoped<BrandEntity>,
}

impl SqliteBrandRepository {
    pub fn new(db: &Database, images: Arc<dyn ImageRepository>) -> Self {
        Self {
            users: UserScoped::new(Table::new(db.connection()), images),
        }
    }
}

#[async_trait]
impl BrandRepository for SqliteBrandRepository {
    async fn load_collection(&self) -> Result<Vec<Brand>> {
        self.users.table().load_collection().await
    }

    async fn load_by_id(&self, id: &str) -> Result<Brand> {
        self.users.table().load_by_id(id).await
    }

    async fn load_for_auth_user(&self, auth_user_id: &str) -> Result<Brand> {
        self.users.load_for_auth_user(auth_user_id).await
    }

    async fn write_new_for_auth_user(&self, auth_user_id: &str, payload: Brand) -> Result<Brand> {
        self.users
            .write_new_for_auth_user(auth_user_id, payload)
            .await
    }

    async fn update_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: BrandRequest,
    ) -> Result<Brand> {
        self.users
            .update_for_auth_user(auth_user_id, |brand| payload.apply_to(brand))
            .await
    }

    async fn update_logo_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Brand> {
        self.users
            .update_image_for_auth_user(auth_user_id, image_base64, BrandImage::Logo)
            .await
    }

    async fn update_header_image_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Brand> {
        self.users
            .update_image_for_auth_user(auth_user_id, image_base64, BrandImage::HeaderImage)
            .await
    }
}

// ============================================================================
// InfluencerRepository implementation
// ============================================================================

pub struct SqliteInfluencerRepository {
    users: UserScoped<InfluencerEntity>,
}

impl SqliteInfluencerRepository {
    pub fn new(db: &Database, images: Arc<dyn ImageRepository>) -> Self {
        Self {
            users: UserScoped::new(Table::new(db.connection()), images),
        }
    }
}

#[async_trait]
impl InfluencerRepository for SqliteInfluencerRepository {
    async fn load_collection(&self) -> Result<Vec<Influencer>> {
        self.users.table().load_collection().await
    }

    async fn load_by_id(&self, id: &str) -> Result<Influencer> {
        self.users.table().load_by_id(id).await
    }

    async fn load_for_auth_user(&self, auth_user_id: &str) -> Result<Influencer> {
        self.users.load_for_auth_user(auth_user_id).await
    }

    async fn write_new_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: Influencer,
    ) -> Result<Influencer> {
        self.users
            .write_new_for_auth_user(auth_user_id, payload)
            .await
    }

    async fn update_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: InfluencerRequest,
    ) -> Result<Influencer> {
        self.users
            .update_for_auth_user(auth_user_id, |influencer| payload.apply_to(influencer))
            .await
    }

    async fn update_image_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Influencer> {
        self.users
            .update_image_for_auth_user(auth_user_id, image_base64, InfluencerImage)
            .await
    }
}

// ============================================================================
// ProductRepository implementation
// ============================================================================

pub struct SqliteProductRepository {
    owned: OwnerScoped<ProductEntity>,
}

impl SqliteProductRepository {
    pub fn new(db: &Database, images: Arc<dyn ImageRepository>) -> Self {
        Self {
            owned: OwnerScoped::new(
                Table::new(db.connection()),
                Table::new(db.connection()),
                images,
            ),
        }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn load_collection(&self) -> Result<Vec<Product>> {
        self.owned.table().load_collection().await
    }

    async fn load_by_id(&self, id: &str) -> Result<Product> {
        self.owned.table().load_by_id(id).await
    }

    async fn load_all_products_for_brand(&self, brand_id: &str) -> Result<Vec<Product>> {
        self.owned.load_for_owner(brand_id).await
    }

    async fn load_for_auth_brand(&self, auth_user_id: &str) -> Result<Vec<Product>> {
        self.owned.load_for_auth_owner(auth_user_id).await
    }

    async fn load_by_id_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
    ) -> Result<Product> {
        self.owned
            .load_by_id_for_auth_owner(auth_user_id, product_id)
            .await
    }

    async fn write_new_for_auth_brand(
        &self,
        auth_user_id: &str,
        payload: Product,
    ) -> Result<Product> {
        self.owned
            .write_new_for_auth_owner(auth_user_id, payload)
            .await
    }

    async fn update_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
        payload: ProductRequest,
    ) -> Result<Product> {
        self.owned
            .update_for_auth_owner(auth_user_id, product_id, |product| {
                payload.apply_to(product)
            })
            .await
    }

    async fn delete_for_auth_brand(&self, auth_user_id: &str, product_id: &str) -> Result<()> {
        self.owned
            .delete_for_auth_owner(auth_user_id, product_id)
            .await
    }

    async fn update_image_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
        image_base64: &str,
    ) -> Result<Product> {
        self.owned
            .update_image_for_auth_owner(auth_user_id, product_id, image_base64, ProductImage)
            .await
    }
}

// ============================================================================
// CampaignRepository implementation
// ============================================================================

pub struct SqliteCampaignRepository {
    owned: OwnerScoped<CampaignEntity>,
}

impl SqliteCampaignRepository {
    pub fn new(db: &Database, images: Arc<dyn ImageRepository>) -> Self {
        Self {
            owned: OwnerScoped::new(
                Table::new(db.connection()),
                Table::new(db.connection()),
                images,
            ),
        }
    }
}

#[async_trait]
impl CampaignRepository for SqliteCampaignRepository {
    async fn load_collection(&self) -> Result<Vec<Campaign>> {
        self.owned.table().load_collection().await
    }

    async fn load_by_id(&self, id: &str) -> Result<Campaign> {
        self.owned.table().load_by_id(id).await
    }

    async fn load_for_auth_brand(&self, auth_user_id: &str) -> Result<Vec<Campaign>> {
        self.owned.load_for_auth_owner(auth_user_id).await
    }

    async fn write_new_for_auth_brand(
        &self,
        auth_user_id: &str,
        payload: Campaign,
    ) -> Result<Campaign> {
        self.owned
            .write_new_for_auth_owner(auth_user_id, payload)
            .await
    }

    async fn update_campaign(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        payload: CampaignRequest,
    ) -> Result<Campaign> {
        self.owned
            .update_for_auth_owner(auth_user_id, campaign_id, |campaign| {
                payload.apply_to(campaign)
            })
            .await
    }

    async fn update_campaign_state(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        state: CampaignState,
    ) -> Result<Campaign> {
        tracing::debug!(campaign_id, state = state.as_str(), "Updating campaign state");
        self.owned
            .update_for_auth_owner(auth_user_id, campaign_id, |campaign| {
                campaign.state = state
            })
            .await
    }

    async fn update_product_image(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        slot: CampaignImageSlot,
        image_base64: &str,
    ) -> Result<Campaign> {
        self.owned
            .update_image_for_auth_owner(auth_user_id, campaign_id, image_base64, slot)
            .await
    }

    async fn delete_for_auth_brand(&self, auth_user_id: &str, campaign_id: &str) -> Result<()> {
        self.owned
            .delete_for_auth_owner(auth_user_id, campaign_id)
            .await
    }
}
