mod error;
mod operations;
mod requests;
mod tags;
mod types;

pub use error::ValidationError;
pub use operations::{
    validate_brand_request, validate_campaign_request, validate_image_upload,
    validate_influencer_request, validate_product_request,
};
pub use requests::{
    BrandRequest, CampaignRequest, CampaignStateRequest, ImageUploadRequest, InfluencerRequest,
    ProductRequest,
};
pub use tags::{decode_tags, encode_tags, CampaignState, CategoryTag, ValueTag};
pub use types::{
    new_record_id, AudienceSplits, Brand, Campaign, CampaignImageSlot, Influencer, Product,
};
