use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Values a brand, influencer or campaign can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTag {
    Sustainable,
    Organic,
    Recycled,
    Vegan,
    Value5,
    Value6,
    Value7,
    Value8,
    Value9,
    Value10,
}

/// Market categories a brand, influencer or campaign can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    Food,
    Fashion,
    Fitness,
    Pet,
    Category5,
    Category6,
    Category7,
    Category8,
    Category9,
    Category10,
}

/// Lifecycle of a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignState {
    #[default]
    Draft,
    Active,
    Closed,
}

impl CampaignState {
    /// Name used when the state is persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignState::Draft => "DRAFT",
            CampaignState::Active => "ACTIVE",
            CampaignState::Closed => "CLOSED",
        }
    }

    /// Parses a persisted state name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(CampaignState::Draft),
            "ACTIVE" => Some(CampaignState::Active),
            "CLOSED" => Some(CampaignState::Closed),
            _ => None,
        }
    }
}

/// Encodes a tag set as a JSON array of tag names.
pub fn encode_tags<T: Serialize>(tags: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tags)
}

/// Decodes a tag set previously written by [`encode_tags`].
pub fn decode_tags<T: DeserializeOwned>(encoded: &str) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_str(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_encode_as_names() {
        let encoded = encode_tags(&[ValueTag::Vegan, ValueTag::Organic]).unwrap();
        assert_eq!(encoded, r#"["Vegan","Organic"]"#);
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        let result = decode_tags::<CategoryTag>(r#"["Food","Gardening"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_set() {
        let tags: Vec<CategoryTag> = decode_tags("[]").unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_campaign_state_names() {
        for state in [
            CampaignState::Draft,
            CampaignState::Active,
            CampaignState::Closed,
        ] {
            assert_eq!(CampaignState::parse(state.as_str()), Some(state));
        }
        assert_eq!(CampaignState::parse("draft"), None);
        assert_eq!(
            serde_json::to_string(&CampaignState::Active).unwrap(),
            r#""ACTIVE""#
        );
    }
}
