//! Checks every processor runs before touching a repository.

use serde::de::DeserializeOwned;

use pinfluencer_core::api::ApiEvent;
use pinfluencer_core::marketplace::{CampaignImageSlot, ValidationError};

use super::ProcessError;

/// Returns the caller's identity or `Unauthorized`.
pub fn require_auth(event: &ApiEvent) -> Result<&str, ProcessError> {
    event.auth_user_id().ok_or(ProcessError::Unauthorized)
}

/// Parses the JSON body into `T` and runs `validate` on it.
pub fn valid_body<T, V>(event: &ApiEvent, validate: V) -> Result<T, ProcessError>
where
    T: DeserializeOwned,
    V: FnOnce(&T) -> Result<(), ValidationError>,
{
    let payload: T = event.json_body()?;
    validate(&payload)?;
    Ok(payload)
}

/// Returns a path identifier or a validation error naming it.
pub fn path_id<'a>(event: &'a ApiEvent, name: &'static str) -> Result<&'a str, ProcessError> {
    Ok(event.require_path_parameter(name)?)
}

/// Parses the `slot` path parameter of a campaign image upload.
pub fn image_slot(event: &ApiEvent) -> Result<CampaignImageSlot, ProcessError> {
    let raw = path_id(event, "slot")?;
    CampaignImageSlot::from_path(raw)
        .ok_or_else(|| ValidationError::InvalidImageSlot(raw.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinfluencer_core::marketplace::{validate_product_request, ProductRequest};

    #[test]
    fn test_require_auth() {
        assert!(matches!(
            require_auth(&ApiEvent::new()),
            Err(ProcessError::Unauthorized)
        ));
        assert_eq!(
            require_auth(&ApiEvent::new().with_auth_user("u-1")).unwrap(),
            "u-1"
        );
    }

    #[test]
    fn test_valid_body_runs_validation() {
        let event = ApiEvent::new().with_body(r#"{"name": "", "description": "x"}"#);

        let result: Result<ProductRequest, _> = valid_body(&event, validate_product_request);

        assert!(matches!(
            result,
            Err(ProcessError::Validation(ValidationError::EmptyField("name")))
        ));
    }

    #[test]
    fn test_image_slot() {
        let event = ApiEvent::new().with_path_parameter("slot", "2");
        assert_eq!(image_slot(&event).unwrap(), CampaignImageSlot::Second);

        let bad = ApiEvent::new().with_path_parameter("slot", "4");
        assert!(matches!(
            image_slot(&bad),
            Err(ProcessError::Validation(ValidationError::InvalidImageSlot(_)))
        ));

        assert!(matches!(
            image_slot(&ApiEvent::new()),
            Err(ProcessError::Validation(ValidationError::MissingPathParameter("slot")))
        ));
    }
}
