use async_trait::async_trait;

use crate::marketplace::{
    Brand, BrandRequest, Campaign, CampaignImageSlot, CampaignRequest, CampaignState, Influencer,
    InfluencerRequest, Product, ProductRequest,
};

use super::Result;

/// Repository for brand accounts, one per auth identity.
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Lists every brand.
    async fn load_collection(&self) -> Result<Vec<Brand>>;

    /// Gets a brand by its ID.
    async fn load_by_id(&self, id: &str) -> Result<Brand>;

    /// Gets the brand owned by an auth identity.
    async fn load_for_auth_user(&self, auth_user_id: &str) -> Result<Brand>;

    /// Creates the brand for an auth identity. Fails if one already exists.
    async fn write_new_for_auth_user(&self, auth_user_id: &str, payload: Brand) -> Result<Brand>;

    /// Overwrites the editable fields of the brand owned by an auth identity.
    async fn update_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: BrandRequest,
    ) -> Result<Brand>;

    /// Uploads a new logo and stores its key.
    async fn update_logo_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Brand>;

    /// Uploads a new header image and stores its key.
    async fn update_header_image_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Brand>;
}

/// Repository for influencer accounts, one per auth identity.
#[async_trait]
pub trait InfluencerRepository: Send + Sync {
    async fn load_collection(&self) -> Result<Vec<Influencer>>;

    async fn load_by_id(&self, id: &str) -> Result<Influencer>;

    async fn load_for_auth_user(&self, auth_user_id: &str) -> Result<Influencer>;

    async fn write_new_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: Influencer,
    ) -> Result<Influencer>;

    async fn update_for_auth_user(
        &self,
        auth_user_id: &str,
        payload: InfluencerRequest,
    ) -> Result<Influencer>;

    /// Uploads a new profile image and stores its key.
    async fn update_image_for_auth_user(
        &self,
        auth_user_id: &str,
        image_base64: &str,
    ) -> Result<Influencer>;
}

/// Repository for products, scoped by their owning brand.
///
/// The `*_for_auth_brand` operations resolve the brand from the caller's
/// auth identity. A product owned by another brand is reported as not found.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn load_collection(&self) -> Result<Vec<Product>>;

    async fn load_by_id(&self, id: &str) -> Result<Product>;

    /// Lists the products of a brand, in insertion order.
    async fn load_all_products_for_brand(&self, brand_id: &str) -> Result<Vec<Product>>;

    async fn load_for_auth_brand(&self, auth_user_id: &str) -> Result<Vec<Product>>;

    async fn load_by_id_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
    ) -> Result<Product>;

    async fn write_new_for_auth_brand(
        &self,
        auth_user_id: &str,
        payload: Product,
    ) -> Result<Product>;

    async fn update_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
        payload: ProductRequest,
    ) -> Result<Product>;

    async fn delete_for_auth_brand(&self, auth_user_id: &str, product_id: &str) -> Result<()>;

    async fn update_image_for_auth_brand(
        &self,
        auth_user_id: &str,
        product_id: &str,
        image_base64: &str,
    ) -> Result<Product>;
}

/// Repository for campaigns, scoped by their owning brand.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    async fn load_collection(&self) -> Result<Vec<Campaign>>;

    async fn load_by_id(&self, id: &str) -> Result<Campaign>;

    async fn load_for_auth_brand(&self, auth_user_id: &str) -> Result<Vec<Campaign>>;

    async fn write_new_for_auth_brand(
        &self,
        auth_user_id: &str,
        payload: Campaign,
    ) -> Result<Campaign>;

    /// Overwrites the content of a campaign. State and images are untouched.
    async fn update_campaign(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        payload: CampaignRequest,
    ) -> Result<Campaign>;

    async fn update_campaign_state(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        state: CampaignState,
    ) -> Result<Campaign>;

    /// Uploads an image into one of the campaign's product image slots.
    async fn update_product_image(
        &self,
        auth_user_id: &str,
        campaign_id: &str,
        slot: CampaignImageSlot,
        image_base64: &str,
    ) -> Result<Campaign>;

    async fn delete_for_auth_brand(&self, auth_user_id: &str, campaign_id: &str) -> Result<()>;
}
