use thiserror::Error;

/// Errors raised when a request payload is rejected before reaching storage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(String),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("{field} too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidSplit { field: &'static str, value: f64 },
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(&'static str),
    #[error("Invalid image slot: {0} (expected 1, 2 or 3)")]
    InvalidImageSlot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyField("name").to_string(),
            "name cannot be empty"
        );
        assert_eq!(
            ValidationError::TooLong {
                field: "bio",
                max: 500
            }
            .to_string(),
            "bio too long (max 500 characters)"
        );
        assert_eq!(
            ValidationError::MissingPathParameter("product_id").to_string(),
            "Missing path parameter: product_id"
        );
    }
}
