//! API request payloads for marketplace operations.
//!
//! Pure data types deserialised from request bodies. Create requests build a
//! fresh model with a new id; update requests overwrite every editable field
//! of an existing model.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::tags::{CampaignState, CategoryTag, ValueTag};
use super::types::{new_record_id, AudienceSplits, Brand, Campaign, Influencer, Product};

/// Payload for creating or overwriting a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub name: String,
    pub description: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instahandle: Option<String>,
    #[serde(default)]
    pub values: Vec<ValueTag>,
    #[serde(default)]
    pub categories: Vec<CategoryTag>,
}

impl BrandRequest {
    /// Builds a new brand. The auth identity is assigned by the repository.
    pub fn into_brand(self) -> Brand {
        Brand {
            id: new_record_id(),
            created: Utc::now(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            auth_user_id: String::new(),
            name: self.name,
            description: self.description,
            website: self.website,
            logo: None,
            header_image: None,
            instahandle: self.instahandle,
            values: self.values,
            categories: self.categories,
        }
    }

    /// Overwrites the editable fields of `brand`. Identity and images are kept.
    pub fn apply_to(self, brand: &mut Brand) {
        brand.first_name = self.first_name;
        brand.last_name = self.last_name;
        brand.email = self.email;
        brand.name = self.name;
        brand.description = self.description;
        brand.website = self.website;
        brand.instahandle = self.instahandle;
        brand.values = self.values;
        brand.categories = self.categories;
    }
}

/// Payload for creating or overwriting an influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub website: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instahandle: Option<String>,
    #[serde(flatten)]
    pub audience: AudienceSplits,
    #[serde(default)]
    pub values: Vec<ValueTag>,
    #[serde(default)]
    pub categories: Vec<CategoryTag>,
}

impl InfluencerRequest {
    /// Builds a new influencer. The auth identity is assigned by the repository.
    pub fn into_influencer(self) -> Influencer {
        Influencer {
            id: new_record_id(),
            created: Utc::now(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            auth_user_id: String::new(),
            website: self.website,
            bio: self.bio,
            image: None,
            instahandle: self.instahandle,
            audience: self.audience,
            values: self.values,
            categories: self.categories,
        }
    }

    /// Overwrites the editable fields of `influencer`.
    pub fn apply_to(self, influencer: &mut Influencer) {
        influencer.first_name = self.first_name;
        influencer.last_name = self.last_name;
        influencer.email = self.email;
        influencer.website = self.website;
        influencer.bio = self.bio;
        influencer.instahandle = self.instahandle;
        influencer.audience = self.audience;
        influencer.values = self.values;
        influencer.categories = self.categories;
    }
}

/// Payload for creating or overwriting a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

impl ProductRequest {
    /// Builds a new product. The owning brand is assigned by the repository.
    pub fn into_product(self) -> Product {
        Product {
            id: new_record_id(),
            created: Utc::now(),
            name: self.name,
            description: self.description,
            requirements: self.requirements,
            image: None,
            brand_id: String::new(),
        }
    }

    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.description = self.description;
        product.requirements = self.requirements;
    }
}

/// Payload for creating or overwriting a campaign's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub objective: String,
    pub success_description: String,
    pub campaign_title: String,
    pub campaign_description: String,
    #[serde(default)]
    pub campaign_categories: Vec<CategoryTag>,
    #[serde(default)]
    pub campaign_values: Vec<ValueTag>,
    #[serde(default)]
    pub campaign_product_link: String,
    #[serde(default)]
    pub campaign_hashtag: String,
    #[serde(default)]
    pub campaign_discount_code: String,
    pub product_title: String,
    pub product_description: String,
}

impl CampaignRequest {
    /// Builds a new draft campaign. The owning brand is assigned by the repository.
    pub fn into_campaign(self) -> Campaign {
        Campaign {
            id: new_record_id(),
            created: Utc::now(),
            brand_id: String::new(),
            state: CampaignState::Draft,
            objective: self.objective,
            success_description: self.success_description,
            campaign_title: self.campaign_title,
            campaign_description: self.campaign_description,
            campaign_categories: self.campaign_categories,
            campaign_values: self.campaign_values,
            campaign_product_link: self.campaign_product_link,
            campaign_hashtag: self.campaign_hashtag,
            campaign_discount_code: self.campaign_discount_code,
            product_title: self.product_title,
            product_description: self.product_description,
            product_image1: None,
            product_image2: None,
            product_image3: None,
        }
    }

    /// Overwrites the content fields of `campaign`. State and images are kept.
    pub fn apply_to(self, campaign: &mut Campaign) {
        campaign.objective = self.objective;
        campaign.success_description = self.success_description;
        campaign.campaign_title = self.campaign_title;
        campaign.campaign_description = self.campaign_description;
        campaign.campaign_categories = self.campaign_categories;
        campaign.campaign_values = self.campaign_values;
        campaign.campaign_product_link = self.campaign_product_link;
        campaign.campaign_hashtag = self.campaign_hashtag;
        campaign.campaign_discount_code = self.campaign_discount_code;
        campaign.product_title = self.product_title;
        campaign.product_description = self.product_description;
    }
}

/// Payload for moving a campaign through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStateRequest {
    pub state: CampaignState,
}

/// Payload carrying a base64-encoded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUploadRequest {
    pub image_bytes: String,
}
