//! SQLite row and entity conversion functions.
//!
//! Row readers build entities from result rows in the column order declared
//! in `schema`. The `TryFrom` impls map entities to domain models and back;
//! they are the only place tag sets, timestamps and campaign states change
//! representation.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use pinfluencer_core::marketplace::{
    decode_tags, encode_tags, AudienceSplits, Brand, Campaign, CampaignState, Influencer, Product,
};
use pinfluencer_core::storage::RepositoryError;

use super::entities::{BrandEntity, CampaignEntity, InfluencerEntity, ProductEntity};

// ============================================================================
// Row readers
// ============================================================================

/// Expected columns: see `schema::BRAND_COLUMNS`.
pub fn row_to_brand(row: &Row) -> rusqlite::Result<BrandEntity> {
    Ok(BrandEntity {
        id: row.get(0)?,
        created: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        auth_user_id: row.get(5)?,
        name: row.get(6)?,
        description: row.get(7)?,
        website: row.get(8)?,
        logo: row.get(9)?,
        header_image: row.get(10)?,
        instahandle: row.get(11)?,
        values: row.get(12)?,
        categories: row.get(13)?,
    })
}

/// Expected columns: see `schema::INFLUENCER_COLUMNS`.
pub fn row_to_influencer(row: &Row) -> rusqlite::Result<InfluencerEntity> {
    Ok(InfluencerEntity {
        id: row.get(0)?,
        created: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        auth_user_id: row.get(5)?,
        website: row.get(6)?,
        bio: row.get(7)?,
        image: row.get(8)?,
        instahandle: row.get(9)?,
        audience_age_13_to_17_split: row.get(10)?,
        audience_age_18_to_24_split: row.get(11)?,
        audience_age_25_to_34_split: row.get(12)?,
        audience_age_35_to_44_split: row.get(13)?,
        audience_age_45_to_54_split: row.get(14)?,
        audience_age_55_to_64_split: row.get(15)?,
        audience_age_65_plus_split: row.get(16)?,
        audience_male_split: row.get(17)?,
        audience_female_split: row.get(18)?,
        values: row.get(19)?,
        categories: row.get(20)?,
    })
}

/// Expected columns: id, created, name, description, requirements, image, brand_id
pub fn row_to_product(row: &Row) -> rusqlite::Result<ProductEntity> {
    Ok(ProductEntity {
        id: row.get(0)?,
        created: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        requirements: row.get(4)?,
        image: row.get(5)?,
        brand_id: row.get(6)?,
    })
}

/// Expected columns: see `schema::CAMPAIGN_COLUMNS`.
pub fn row_to_campaign(row: &Row) -> rusqlite::Result<CampaignEntity> {
    Ok(CampaignEntity {
        id: row.get(0)?,
        created: row.get(1)?,
        brand_id: row.get(2)?,
        state: row.get(3)?,
        objective: row.get(4)?,
        success_description: row.get(5)?,
        campaign_title: row.get(6)?,
        campaign_description: row.get(7)?,
        campaign_categories: row.get(8)?,
        campaign_values: row.get(9)?,
        campaign_product_link: row.get(10)?,
        campaign_hashtag: row.get(11)?,
        campaign_discount_code: row.get(12)?,
        product_title: row.get(13)?,
        product_description: row.get(14)?,
        product_image1: row.get(15)?,
        product_image2: row.get(16)?,
        product_image3: row.get(17)?,
    })
}

// ============================================================================
// Brand
// ============================================================================

impl TryFrom<BrandEntity> for Brand {
    type Error = RepositoryError;

    fn try_from(entity: BrandEntity) -> Result<Self, Self::Error> {
        Ok(Brand {
            created: parse_datetime(&entity.created)?,
            values: decode_tags(&entity.values).map_err(serialization)?,
            categories: decode_tags(&entity.categories).map_err(serialization)?,
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            auth_user_id: entity.auth_user_id,
            name: entity.name,
            description: entity.description,
            website: entity.website,
            logo: entity.logo,
            header_image: entity.header_image,
            instahandle: entity.instahandle,
        })
    }
}

impl TryFrom<&Brand> for BrandEntity {
    type Error = RepositoryError;

    fn try_from(brand: &Brand) -> Result<Self, Self::Error> {
        Ok(BrandEntity {
            id: brand.id.clone(),
            created: format_datetime(&brand.created),
            first_name: brand.first_name.clone(),
            last_name: brand.last_name.clone(),
            email: brand.email.clone(),
            auth_user_id: brand.auth_user_id.clone(),
            name: brand.name.clone(),
            description: brand.description.clone(),
            website: brand.website.clone(),
            logo: brand.logo.clone(),
            header_image: brand.header_image.clone(),
            instahandle: brand.instahandle.clone(),
            values: encode_tags(&brand.values).map_err(serialization)?,
            categories: encode_tags(&brand.categories).map_err(serialization)?,
        })
    }
}

// ============================================================================
// Influencer
// ============================================================================

impl TryFrom<InfluencerEntity> for Influencer {
    type Error = RepositoryError;

    fn try_from(entity: InfluencerEntity) -> Result<Self, Self::Error> {
        Ok(Influencer {
            created: parse_datetime(&entity.created)?,
            values: decode_tags(&entity.values).map_err(serialization)?,
            categories: decode_tags(&entity.categories).map_err(serialization)?,
            audience: AudienceSplits {
                audience_age_13_to_17_split: entity.audience_age_13_to_17_split,
                audience_age_18_to_24_split: entity.audience_age_18_to_24_split,
                audience_age_25_to_34_split: entity.audience_age_25_to_34_split,
                audience_age_35_to_44_split: entity.audience_age_35_to_44_split,
                audience_age_45_to_54_split: entity.audience_age_45_to_54_split,
                audience_age_55_to_64_split: entity.audience_age_55_to_64_split,
                audience_age_65_plus_split: entity.audience_age_65_plus_split,
                audience_male_split: entity.audience_male_split,
                audience_female_split: entity.audience_female_split,
            },
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            auth_user_id: entity.auth_user_id,
            website: entity.website,
            bio: entity.bio,
            image: entity.image,
            instahandle: entity.instahandle,
        })
    }
}

impl TryFrom<&Influencer> for InfluencerEntity {
    type Error = RepositoryError;

    fn try_from(influencer: &Influencer) -> Result<Self, Self::Error> {
        let audience = influencer.audience;
        Ok(InfluencerEntity {
            id: influencer.id.clone(),
            created: format_datetime(&influencer.created),
            first_name: influencer.first_name.clone(),
            last_name: influencer.last_name.clone(),
            email: influencer.email.clone(),
            auth_user_id: influencer.auth_user_id.clone(),
            website: influencer.website.clone(),
            bio: influencer.bio.clone(),
            image: influencer.image.clone(),
            instahandle: influencer.instahandle.clone(),
            audience_age_13_to_17_split: audience.audience_age_13_to_17_split,
            audience_age_18_to_24_split: audience.audience_age_18_to_24_split,
            audience_age_25_to_34_split: audience.audience_age_25_to_34_split,
            audience_age_35_to_44_split: audience.audience_age_35_to_44_split,
            audience_age_45_to_54_split: audience.audience_age_45_to_54_split,
            audience_age_55_to_64_split: audience.audience_age_55_to_64_split,
            audience_age_65_plus_split: audience.audience_age_65_plus_split,
            audience_male_split: audience.audience_male_split,
            audience_female_split: audience.audience_female_split,
            values: encode_tags(&influencer.values).map_err(serialization)?,
            categories: encode_tags(&influencer.categories).map_err(serialization)?,
        })
    }
}

// ============================================================================
// Product
// ============================================================================

impl TryFrom<ProductEntity> for Product {
    type Error = RepositoryError;

    fn try_from(entity: ProductEntity) -> Result<Self, Self::Error> {
        Ok(Product {
            created: parse_datetime(&entity.created)?,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            requirements: entity.requirements,
            image: entity.image,
            brand_id: entity.brand_id,
        })
    }
}

impl TryFrom<&Product> for ProductEntity {
    type Error = RepositoryError;

    fn try_from(product: &Product) -> Result<Self, Self::Error> {
        Ok(ProductEntity {
            id: product.id.clone(),
            created: format_datetime(&product.created),
            name: product.name.clone(),
            description: product.description.clone(),
            requirements: product.requirements.clone(),
            image: product.image.clone(),
            brand_id: product.brand_id.clone(),
        })
    }
}

// ============================================================================
// Campaign
// ============================================================================

impl TryFrom<CampaignEntity> for Campaign {
    type Error = RepositoryError;

    fn try_from(entity: CampaignEntity) -> Result<Self, Self::Error> {
        let state = CampaignState::parse(&entity.state).ok_or_else(|| {
            RepositoryError::InvalidData(format!("Unknown campaign state: {}", entity.state))
        })?;

        Ok(Campaign {
            created: parse_datetime(&entity.created)?,
            state,
            campaign_categories: decode_tags(&entity.campaign_categories)
                .map_err(serialization)?,
            campaign_values: decode_tags(&entity.campaign_values).map_err(serialization)?,
            id: entity.id,
            brand_id: entity.brand_id,
            objective: entity.objective,
            success_description: entity.success_description,
            campaign_title: entity.campaign_title,
            campaign_description: entity.campaign_description,
            campaign_product_link: entity.campaign_product_link,
            campaign_hashtag: entity.campaign_hashtag,
            campaign_discount_code: entity.campaign_discount_code,
            product_title: entity.product_title,
            product_description: entity.product_description,
            product_image1: entity.product_image1,
            product_image2: entity.product_image2,
            product_image3: entity.product_image3,
        })
    }
}

impl TryFrom<&Campaign> for CampaignEntity {
    type Error = RepositoryError;

    fn try_from(campaign: &Campaign) -> Result<Self, Self::Error> {
        Ok(CampaignEntity {
            id: campaign.id.clone(),
            created: format_datetime(&campaign.created),
            brand_id: campaign.brand_id.clone(),
            state: campaign.state.as_str().to_string(),
            objective: campaign.objective.clone(),
            success_description: campaign.success_description.clone(),
            campaign_title: campaign.campaign_title.clone(),
            campaign_description: campaign.campaign_description.clone(),
            campaign_categories: encode_tags(&campaign.campaign_categories)
                .map_err(serialization)?,
            campaign_values: encode_tags(&campaign.campaign_values).map_err(serialization)?,
            campaign_product_link: campaign.campaign_product_link.clone(),
            campaign_hashtag: campaign.campaign_hashtag.clone(),
            campaign_discount_code: campaign.campaign_discount_code.clone(),
            product_title: campaign.product_title.clone(),
            product_description: campaign.product_description.clone(),
            product_image1: campaign.product_image1.clone(),
            product_image2: campaign.product_image2.clone(),
            product_image3: campaign.product_image3.clone(),
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn serialization(err: serde_json::Error) -> RepositoryError {
    RepositoryError::Serialization(err.to_string())
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("Invalid timestamp {s}: {e}")))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_entity() -> BrandEntity {
        BrandEntity {
            id: "b-1".to_string(),
            created: "2024-03-01T10:15:30+00:00".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            auth_user_id: "auth-1".to_string(),
            name: "Analytical".to_string(),
            description: "Engines".to_string(),
            website: "https://example.com".to_string(),
            logo: Some("b-1/logo.png".to_string()),
            header_image: None,
            instahandle: Some("@ada".to_string()),
            values: r#"["Vegan","Organic"]"#.to_string(),
            categories: r#"["Food"]"#.to_string(),
        }
    }

    fn campaign_entity() -> CampaignEntity {
        CampaignEntity {
            id: "c-1".to_string(),
            created: "2024-03-01T10:15:30+00:00".to_string(),
            brand_id: "b-1".to_string(),
            state: "ACTIVE".to_string(),
            objective: "awareness".to_string(),
            success_description: "reach".to_string(),
            campaign_title: "Spring".to_string(),
            campaign_description: "Launch".to_string(),
            campaign_categories: r#"["Fashion"]"#.to_string(),
            campaign_values: "[]".to_string(),
            campaign_product_link: "https://example.com/p".to_string(),
            campaign_hashtag: "#spring".to_string(),
            campaign_discount_code: "SPRING10".to_string(),
            product_title: "Jacket".to_string(),
            product_description: "Warm".to_string(),
            product_image1: Some("c-1/1.png".to_string()),
            product_image2: None,
            product_image3: Some("c-1/3.png".to_string()),
        }
    }

    #[test]
    fn test_brand_round_trip_preserves_fields() {
        let entity = brand_entity();

        let brand = Brand::try_from(entity.clone()).unwrap();
        let back = BrandEntity::try_from(&brand).unwrap();

        assert_eq!(brand.values.len(), 2);
        assert_eq!(back, entity);
    }

    #[test]
    fn test_influencer_round_trip_preserves_splits() {
        let entity = InfluencerEntity {
            id: "i-1".to_string(),
            created: "2024-03-01T10:15:30+00:00".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            auth_user_id: "auth-2".to_string(),
            website: "https://example.org".to_string(),
            bio: "Compilers".to_string(),
            image: None,
            instahandle: None,
            audience_age_13_to_17_split: Some(0.1),
            audience_age_18_to_24_split: Some(0.4),
            audience_age_25_to_34_split: None,
            audience_age_35_to_44_split: None,
            audience_age_45_to_54_split: None,
            audience_age_55_to_64_split: None,
            audience_age_65_plus_split: Some(0.5),
            audience_male_split: Some(0.3),
            audience_female_split: Some(0.7),
            values: "[]".to_string(),
            categories: r#"["Fitness","Pet"]"#.to_string(),
        };

        let influencer = Influencer::try_from(entity.clone()).unwrap();
        let back = InfluencerEntity::try_from(&influencer).unwrap();

        assert_eq!(influencer.audience.audience_female_split, Some(0.7));
        assert_eq!(back, entity);
    }

    #[test]
    fn test_product_round_trip_preserves_fields() {
        let entity = ProductEntity {
            id: "p-1".to_string(),
            created: "2024-03-01T10:15:30+00:00".to_string(),
            name: "Granola".to_string(),
            description: "Crunchy".to_string(),
            requirements: "one post".to_string(),
            image: None,
            brand_id: "b-1".to_string(),
        };

        let product = Product::try_from(entity.clone()).unwrap();

        assert_eq!(ProductEntity::try_from(&product).unwrap(), entity);
    }

    #[test]
    fn test_campaign_round_trip_preserves_state_and_slots() {
        let entity = campaign_entity();

        let campaign = Campaign::try_from(entity.clone()).unwrap();

        assert_eq!(campaign.state, CampaignState::Active);
        assert_eq!(CampaignEntity::try_from(&campaign).unwrap(), entity);
    }

    #[test]
    fn test_unknown_campaign_state_is_invalid_data() {
        let mut entity = campaign_entity();
        entity.state = "ARCHIVED".to_string();

        let result = Campaign::try_from(entity);

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_unknown_tag_is_serialization_error() {
        let mut entity = brand_entity();
        entity.values = r#"["Gardening"]"#.to_string();

        let result = Brand::try_from(entity);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_invalid_timestamp_is_serialization_error() {
        let mut entity = brand_entity();
        entity.created = "yesterday".to_string();

        assert!(matches!(
            Brand::try_from(entity),
            Err(RepositoryError::Serialization(_))
        ));
    }
}
