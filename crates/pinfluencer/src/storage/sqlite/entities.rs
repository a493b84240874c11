//! Storage-facing records, one per table.
//!
//! Entities mirror the columns exactly: timestamps are RFC 3339 text, tag sets
//! are JSON arrays and the campaign state is its persisted name. Conversion to
//! and from the domain models lives in `conversions`.

use rusqlite::{params, Connection, Row};

use pinfluencer_core::marketplace::{Brand, Campaign, CampaignImageSlot, Influencer, Product};
use pinfluencer_core::storage::Result;

use super::conversions::{row_to_brand, row_to_campaign, row_to_influencer, row_to_product};
use super::schema;
use super::table::{Entity, ImageField, OwnedEntity, UserEntity};

#[derive(Debug, Clone, PartialEq)]
pub struct BrandEntity {
    pub id: String,
    pub created: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub auth_user_id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo: Option<String>,
    pub header_image: Option<String>,
    pub instahandle: Option<String>,
    pub values: String,
    pub categories: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfluencerEntity {
    pub id: String,
    pub created: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub auth_user_id: String,
    pub website: String,
    pub bio: String,
    pub image: Option<String>,
    pub instahandle: Option<String>,
    pub audience_age_13_to_17_split: Option<f64>,
    pub audience_age_18_to_24_split: Option<f64>,
    pub audience_age_25_to_34_split: Option<f64>,
    pub audience_age_35_to_44_split: Option<f64>,
    pub audience_age_45_to_54_split: Option<f64>,
    pub audience_age_55_to_64_split: Option<f64>,
    pub audience_age_65_plus_split: Option<f64>,
    pub audience_male_split: Option<f64>,
    pub audience_female_split: Option<f64>,
    pub values: String,
    pub categories: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEntity {
    pub id: String,
    pub created: String,
    pub name: String,
    pub description: String,
    pub requirements: String,
    pub image: Option<String>,
    pub brand_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignEntity {
    pub id: String,
    pub created: String,
    pub brand_id: String,
    pub state: String,
    pub objective: String,
    pub success_description: String,
    pub campaign_title: String,
    pub campaign_description: String,
    pub campaign_categories: String,
    pub campaign_values: String,
    pub campaign_product_link: String,
    pub campaign_hashtag: String,
    pub campaign_discount_code: String,
    pub product_title: String,
    pub product_description: String,
    pub product_image1: Option<String>,
    pub product_image2: Option<String>,
    pub product_image3: Option<String>,
}

// ============================================================================
// Image columns
// ============================================================================

/// Image columns on the brand table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandImage {
    Logo,
    HeaderImage,
}

impl ImageField for BrandImage {
    fn column(self) -> &'static str {
        match self {
            BrandImage::Logo => "logo",
            BrandImage::HeaderImage => "header_image",
        }
    }
}

/// The influencer's profile image column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfluencerImage;

impl ImageField for InfluencerImage {
    fn column(self) -> &'static str {
        "image"
    }
}

/// The product image column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductImage;

impl ImageField for ProductImage {
    fn column(self) -> &'static str {
        "image"
    }
}

impl ImageField for CampaignImageSlot {
    fn column(self) -> &'static str {
        match self {
            CampaignImageSlot::First => "product_image1",
            CampaignImageSlot::Second => "product_image2",
            CampaignImageSlot::Third => "product_image3",
        }
    }
}

// ============================================================================
// Entity implementations
// ============================================================================

impl Entity for BrandEntity {
    type Model = Brand;

    const ENTITY_TYPE: &'static str = "Brand";
    const TABLE: &'static str = schema::BRAND_TABLE;
    const COLUMNS: &'static str = schema::BRAND_COLUMNS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        row_to_brand(row)
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::INSERT_BRAND,
            params![
                self.id,
                self.created,
                self.first_name,
                self.last_name,
                self.email,
                self.auth_user_id,
                self.name,
                self.description,
                self.website,
                self.logo,
                self.header_image,
                self.instahandle,
                self.values,
                self.categories
            ],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::UPDATE_BRAND,
            params![
                self.id,
                self.first_name,
                self.last_name,
                self.email,
                self.name,
                self.description,
                self.website,
                self.instahandle,
                self.values,
                self.categories
            ],
        )
    }

    fn into_model(self) -> Result<Brand> {
        Brand::try_from(self)
    }

    fn from_model(model: &Brand) -> Result<Self> {
        BrandEntity::try_from(model)
    }
}

impl UserEntity for BrandEntity {
    fn set_auth_user_id(&mut self, auth_user_id: String) {
        self.auth_user_id = auth_user_id;
    }
}

impl Entity for InfluencerEntity {
    type Model = Influencer;

    const ENTITY_TYPE: &'static str = "Influencer";
    const TABLE: &'static str = schema::INFLUENCER_TABLE;
    const COLUMNS: &'static str = schema::INFLUENCER_COLUMNS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        row_to_influencer(row)
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::INSERT_INFLUENCER,
            params![
                self.id,
                self.created,
                self.first_name,
                self.last_name,
                self.email,
                self.auth_user_id,
                self.website,
                self.bio,
                self.image,
                self.instahandle,
                self.audience_age_13_to_17_split,
                self.audience_age_18_to_24_split,
                self.audience_age_25_to_34_split,
                self.audience_age_35_to_44_split,
                self.audience_age_45_to_54_split,
                self.audience_age_55_to_64_split,
                self.audience_age_65_plus_split,
                self.audience_male_split,
                self.audience_female_split,
                self.values,
                self.categories
            ],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::UPDATE_INFLUENCER,
            params![
                self.id,
                self.first_name,
                self.last_name,
                self.email,
                self.website,
                self.bio,
                self.instahandle,
                self.audience_age_13_to_17_split,
                self.audience_age_18_to_24_split,
                self.audience_age_25_to_34_split,
                self.audience_age_35_to_44_split,
                self.audience_age_45_to_54_split,
                self.audience_age_55_to_64_split,
                self.audience_age_65_plus_split,
                self.audience_male_split,
                self.audience_female_split,
                self.values,
                self.categories
            ],
        )
    }

    fn into_model(self) -> Result<Influencer> {
        Influencer::try_from(self)
    }

    fn from_model(model: &Influencer) -> Result<Self> {
        InfluencerEntity::try_from(model)
    }
}

impl UserEntity for InfluencerEntity {
    fn set_auth_user_id(&mut self, auth_user_id: String) {
        self.auth_user_id = auth_user_id;
    }
}

impl Entity for ProductEntity {
    type Model = Product;

    const ENTITY_TYPE: &'static str = "Product";
    const TABLE: &'static str = schema::PRODUCT_TABLE;
    const COLUMNS: &'static str = schema::PRODUCT_COLUMNS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        row_to_product(row)
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::INSERT_PRODUCT,
            params![
                self.id,
                self.created,
                self.name,
                self.description,
                self.requirements,
                self.image,
                self.brand_id
            ],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::UPDATE_PRODUCT,
            params![self.id, self.name, self.description, self.requirements],
        )
    }

    fn into_model(self) -> Result<Product> {
        Product::try_from(self)
    }

    fn from_model(model: &Product) -> Result<Self> {
        ProductEntity::try_from(model)
    }
}

impl OwnedEntity for ProductEntity {
    const OWNER_COLUMN: &'static str = "brand_id";

    fn owner_id(&self) -> &str {
        &self.brand_id
    }

    fn set_owner_id(&mut self, owner_id: String) {
        self.brand_id = owner_id;
    }
}

impl Entity for CampaignEntity {
    type Model = Campaign;

    const ENTITY_TYPE: &'static str = "Campaign";
    const TABLE: &'static str = schema::CAMPAIGN_TABLE;
    const COLUMNS: &'static str = schema::CAMPAIGN_COLUMNS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        row_to_campaign(row)
    }

    fn insert(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::INSERT_CAMPAIGN,
            params![
                self.id,
                self.created,
                self.brand_id,
                self.state,
                self.objective,
                self.success_description,
                self.campaign_title,
                self.campaign_description,
                self.campaign_categories,
                self.campaign_values,
                self.campaign_product_link,
                self.campaign_hashtag,
                self.campaign_discount_code,
                self.product_title,
                self.product_description,
                self.product_image1,
                self.product_image2,
                self.product_image3
            ],
        )
    }

    fn update(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            schema::UPDATE_CAMPAIGN,
            params![
                self.id,
                self.state,
                self.objective,
                self.success_description,
                self.campaign_title,
                self.campaign_description,
                self.campaign_categories,
                self.campaign_values,
                self.campaign_product_link,
                self.campaign_hashtag,
                self.campaign_discount_code,
                self.product_title,
                self.product_description
            ],
        )
    }

    fn into_model(self) -> Result<Campaign> {
        Campaign::try_from(self)
    }

    fn from_model(model: &Campaign) -> Result<Self> {
        CampaignEntity::try_from(model)
    }
}

impl OwnedEntity for CampaignEntity {
    const OWNER_COLUMN: &'static str = "brand_id";

    fn owner_id(&self) -> &str {
        &self.brand_id
    }

    fn set_owner_id(&mut self, owner_id: String) {
        self.brand_id = owner_id;
    }
}
