use super::error::ValidationError;
use super::requests::{
    BrandRequest, CampaignRequest, ImageUploadRequest, InfluencerRequest, ProductRequest,
};
use super::types::AudienceSplits;

// Column widths of the storage schema.
const NAME_MAX: usize = 120;
const EMAIL_MAX: usize = 120;
const WEBSITE_MAX: usize = 120;
const DESCRIPTION_MAX: usize = 500;
const INSTAHANDLE_MAX: usize = 30;

/// Validates a brand payload before it is written.
pub fn validate_brand_request(request: &BrandRequest) -> Result<(), ValidationError> {
    required("first_name", &request.first_name, NAME_MAX)?;
    required("last_name", &request.last_name, NAME_MAX)?;
    validate_email(&request.email)?;
    required("name", &request.name, NAME_MAX)?;
    required("description", &request.description, DESCRIPTION_MAX)?;
    required("website", &request.website, WEBSITE_MAX)?;
    optional("instahandle", request.instahandle.as_deref(), INSTAHANDLE_MAX)
}

/// Validates an influencer payload before it is written.
pub fn validate_influencer_request(request: &InfluencerRequest) -> Result<(), ValidationError> {
    required("first_name", &request.first_name, NAME_MAX)?;
    required("last_name", &request.last_name, NAME_MAX)?;
    validate_email(&request.email)?;
    required("website", &request.website, WEBSITE_MAX)?;
    required("bio", &request.bio, DESCRIPTION_MAX)?;
    optional("instahandle", request.instahandle.as_deref(), INSTAHANDLE_MAX)?;
    validate_splits(&request.audience)
}

/// Validates a product payload before it is written.
pub fn validate_product_request(request: &ProductRequest) -> Result<(), ValidationError> {
    required("name", &request.name, NAME_MAX)?;
    required("description", &request.description, DESCRIPTION_MAX)?;
    optional("requirements", Some(request.requirements.as_str()), DESCRIPTION_MAX)
}

/// Validates a campaign payload before it is written.
pub fn validate_campaign_request(request: &CampaignRequest) -> Result<(), ValidationError> {
    required("objective", &request.objective, DESCRIPTION_MAX)?;
    required("success_description", &request.success_description, DESCRIPTION_MAX)?;
    required("campaign_title", &request.campaign_title, NAME_MAX)?;
    required("campaign_description", &request.campaign_description, DESCRIPTION_MAX)?;
    required("product_title", &request.product_title, NAME_MAX)?;
    required("product_description", &request.product_description, DESCRIPTION_MAX)
}

/// Validates that an image payload carries data.
pub fn validate_image_upload(request: &ImageUploadRequest) -> Result<(), ValidationError> {
    if request.image_bytes.trim().is_empty() {
        return Err(ValidationError::EmptyField("image_bytes"));
    }
    Ok(())
}

fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    required("email", email, EMAIL_MAX)?;
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

fn validate_splits(audience: &AudienceSplits) -> Result<(), ValidationError> {
    for (field, split) in audience.fields() {
        if let Some(value) = split {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidSplit { field, value });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::{CategoryTag, ValueTag};

    fn brand() -> BrandRequest {
        BrandRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            name: "Analytical".to_string(),
            description: "Engines".to_string(),
            website: "https://example.com".to_string(),
            instahandle: Some("@ada".to_string()),
            values: vec![ValueTag::Sustainable],
            categories: vec![CategoryTag::Fashion],
        }
    }

    fn influencer() -> InfluencerRequest {
        InfluencerRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            website: "https://example.com".to_string(),
            bio: "Compilers".to_string(),
            instahandle: None,
            audience: AudienceSplits::default(),
            values: vec![],
            categories: vec![],
        }
    }

    #[test]
    fn test_valid_brand_passes() {
        assert_eq!(validate_brand_request(&brand()), Ok(()));
    }

    #[test]
    fn test_blank_brand_name_rejected() {
        let mut request = brand();
        request.name = "   ".to_string();
        assert_eq!(
            validate_brand_request(&request),
            Err(ValidationError::EmptyField("name"))
        );
    }

    #[test]
    fn test_long_instahandle_rejected() {
        let mut request = brand();
        request.instahandle = Some("x".repeat(31));
        assert_eq!(
            validate_brand_request(&request),
            Err(ValidationError::TooLong {
                field: "instahandle",
                max: 30
            })
        );
    }

    #[test]
    fn test_email_without_domain_rejected() {
        let mut request = brand();
        request.email = "ada@localhost".to_string();
        assert!(matches!(
            validate_brand_request(&request),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_influencer_split_out_of_range() {
        let mut request = influencer();
        request.audience.audience_male_split = Some(1.5);
        assert_eq!(
            validate_influencer_request(&request),
            Err(ValidationError::InvalidSplit {
                field: "audience_male_split",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_influencer_splits_in_range_pass() {
        let mut request = influencer();
        request.audience.audience_male_split = Some(0.0);
        request.audience.audience_female_split = Some(1.0);
        assert_eq!(validate_influencer_request(&request), Ok(()));
    }

    #[test]
    fn test_product_requires_name() {
        let request = ProductRequest {
            name: String::new(),
            description: "desc".to_string(),
            requirements: String::new(),
        };
        assert_eq!(
            validate_product_request(&request),
            Err(ValidationError::EmptyField("name"))
        );
    }

    #[test]
    fn test_product_requirements_counted_in_characters() {
        let mut request = ProductRequest {
            name: "Scarf".to_string(),
            description: "desc".to_string(),
            requirements: "é".repeat(300),
        };
        assert_eq!(validate_product_request(&request), Ok(()));

        request.requirements = "é".repeat(501);
        assert_eq!(
            validate_product_request(&request),
            Err(ValidationError::TooLong {
                field: "requirements",
                max: 500
            })
        );
    }

    #[test]
    fn test_empty_image_rejected() {
        let request = ImageUploadRequest {
            image_bytes: String::new(),
        };
        assert_eq!(
            validate_image_upload(&request),
            Err(ValidationError::EmptyField("image_bytes"))
        );
    }
}
