use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tags::{CampaignState, CategoryTag, ValueTag};

/// A brand account. One per auth identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub created: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// External identity this brand belongs to.
    pub auth_user_id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    /// Storage key of the uploaded logo.
    pub logo: Option<String>,
    /// Storage key of the uploaded header image.
    pub header_image: Option<String>,
    pub instahandle: Option<String>,
    pub values: Vec<ValueTag>,
    pub categories: Vec<CategoryTag>,
}

/// An influencer account. One per auth identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub created: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub auth_user_id: String,
    pub website: String,
    pub bio: String,
    /// Storage key of the uploaded profile image.
    pub image: Option<String>,
    pub instahandle: Option<String>,
    #[serde(flatten)]
    pub audience: AudienceSplits,
    pub values: Vec<ValueTag>,
    pub categories: Vec<CategoryTag>,
}

/// Audience demographic splits reported by an influencer, as fractions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AudienceSplits {
    #[serde(default)]
    pub audience_age_13_to_17_split: Option<f64>,
    #[serde(default)]
    pub audience_age_18_to_24_split: Option<f64>,
    #[serde(default)]
    pub audience_age_25_to_34_split: Option<f64>,
    #[serde(default)]
    pub audience_age_35_to_44_split: Option<f64>,
    #[serde(default)]
    pub audience_age_45_to_54_split: Option<f64>,
    #[serde(default)]
    pub audience_age_55_to_64_split: Option<f64>,
    #[serde(default)]
    pub audience_age_65_plus_split: Option<f64>,
    #[serde(default)]
    pub audience_male_split: Option<f64>,
    #[serde(default)]
    pub audience_female_split: Option<f64>,
}

impl AudienceSplits {
    /// Every split paired with its field name.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("audience_age_13_to_17_split", self.audience_age_13_to_17_split),
            ("audience_age_18_to_24_split", self.audience_age_18_to_24_split),
            ("audience_age_25_to_34_split", self.audience_age_25_to_34_split),
            ("audience_age_35_to_44_split", self.audience_age_35_to_44_split),
            ("audience_age_45_to_54_split", self.audience_age_45_to_54_split),
            ("audience_age_55_to_64_split", self.audience_age_55_to_64_split),
            ("audience_age_65_plus_split", self.audience_age_65_plus_split),
            ("audience_male_split", self.audience_male_split),
            ("audience_female_split", self.audience_female_split),
        ]
    }
}

/// A product listed by a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub created: DateTime<Utc>,
    pub name: String,
    pub description: String,
    pub requirements: String,
    /// Storage key of the product image.
    pub image: Option<String>,
    /// Owning brand.
    pub brand_id: String,
}

/// A marketing campaign run by a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub created: DateTime<Utc>,
    /// Owning brand.
    pub brand_id: String,
    pub state: CampaignState,
    pub objective: String,
    pub success_description: String,
    pub campaign_title: String,
    pub campaign_description: String,
    pub campaign_categories: Vec<CategoryTag>,
    pub campaign_values: Vec<ValueTag>,
    pub campaign_product_link: String,
    pub campaign_hashtag: String,
    pub campaign_discount_code: String,
    pub product_title: String,
    pub product_description: String,
    pub product_image1: Option<String>,
    pub product_image2: Option<String>,
    pub product_image3: Option<String>,
}

/// Generates a fresh record identifier.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// One of the three product image slots on a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignImageSlot {
    First,
    Second,
    Third,
}

impl CampaignImageSlot {
    /// Parses the 1-based slot number used in request paths.
    pub fn from_path(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(CampaignImageSlot::First),
            "2" => Some(CampaignImageSlot::Second),
            "3" => Some(CampaignImageSlot::Third),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ids_are_uuids() {
        let id = new_record_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_record_id());
    }

    #[test]
    fn test_image_slot_from_path() {
        assert_eq!(CampaignImageSlot::from_path("1"), Some(CampaignImageSlot::First));
        assert_eq!(CampaignImageSlot::from_path("3"), Some(CampaignImageSlot::Third));
        assert_eq!(CampaignImageSlot::from_path("0"), None);
        assert_eq!(CampaignImageSlot::from_path("two"), None);
    }

    #[test]
    fn test_influencer_serializes_flat_audience() {
        let influencer = Influencer {
            id: "inf-1".to_string(),
            created: Utc::now(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            auth_user_id: "cognito-grace".to_string(),
            website: "https://example.com".to_string(),
            bio: "Compilers".to_string(),
            image: None,
            instahandle: None,
            audience: AudienceSplits {
                audience_male_split: Some(0.5),
                ..AudienceSplits::default()
            },
            values: vec![],
            categories: vec![],
        };

        let json = serde_json::to_value(&influencer).unwrap();

        assert_eq!(json["audience_male_split"], 0.5);
        assert!(json.get("audience").is_none());
    }
}
