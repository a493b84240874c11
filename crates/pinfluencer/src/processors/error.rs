use thiserror::Error;

use pinfluencer_core::api::ApiResponse;
use pinfluencer_core::marketplace::ValidationError;
use pinfluencer_core::storage::{repository_error_to_status_code, RepositoryError};

/// Why a processor did not produce a successful response.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Not authorised")]
    Unauthorized,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProcessError {
    pub fn status_code(&self) -> u16 {
        match self {
            ProcessError::Unauthorized => 401,
            ProcessError::Validation(_) => 400,
            ProcessError::Repository(err) => repository_error_to_status_code(err),
        }
    }

    /// Renders the error envelope. Server-side failures get a generic message.
    pub fn into_response(self) -> ApiResponse {
        if let ProcessError::Unauthorized = self {
            tracing::debug!("Request has no identity");
            return ApiResponse::unauthorized();
        }

        let status = self.status_code();
        if status >= 500 {
            tracing::error!(status, error = %self, "Request failed");
            return ApiResponse::error(status, "Internal server error");
        }

        tracing::debug!(status, error = %self, "Request rejected");
        ApiResponse::error(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProcessError::Unauthorized.status_code(), 401);
        assert_eq!(
            ProcessError::from(ValidationError::MissingBody).status_code(),
            400
        );
        assert_eq!(
            ProcessError::from(RepositoryError::AlreadyExists {
                entity_type: "Brand",
                id: "b-1".to_string()
            })
            .status_code(),
            409
        );
    }

    #[test]
    fn test_unauthorized_envelope() {
        let response = ProcessError::Unauthorized.into_response();

        assert_eq!(response, ApiResponse::unauthorized());
        assert_eq!(response.body, json!({"message": "Not authorised"}));
    }

    #[test]
    fn test_not_found_message_is_kept() {
        let response = ProcessError::from(RepositoryError::NotFound {
            entity_type: "Product",
            id: "p-1".to_string(),
        })
        .into_response();

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, json!({"message": "Product not found: p-1"}));
    }

    #[test]
    fn test_server_errors_are_generic() {
        let response =
            ProcessError::from(RepositoryError::QueryFailed("syntax error near x".to_string()))
                .into_response();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, json!({"message": "Internal server error"}));

        let unavailable =
            ProcessError::from(RepositoryError::ConnectionFailed("closed".to_string()))
                .into_response();
        assert_eq!(unavailable.status_code, 503);
    }
}
