//! Axum extractor building an [`ApiEvent`] from an HTTP request.

use std::collections::HashMap;

use axum::{
    body::to_bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::HeaderMap,
};

use pinfluencer_core::api::{ApiEvent, ApiResponse};

use super::ApiReply;

/// Header carrying the identity asserted by the upstream authorizer.
pub const AUTH_USER_HEADER: &str = "x-auth-user";

/// Largest accepted request body. Images arrive base64 encoded in JSON.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// The request seen the way the API gateway would deliver it.
#[derive(Debug, Clone)]
pub struct GatewayEvent(pub ApiEvent);

fn extract_auth_user(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTH_USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequest<S> for GatewayEvent
where
    S: Send + Sync,
{
    type Rejection = ApiReply;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Routes without placeholders have no path parameters to extract.
        let path_parameters = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let mut event = ApiEvent::new();
        for (name, value) in path_parameters {
            event = event.with_path_parameter(name, value);
        }
        if let Some(auth_user_id) = extract_auth_user(&parts.headers) {
            event = event.with_auth_user(auth_user_id);
        }

        let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            ApiReply(ApiResponse::error(413, "Request body too large"))
        })?;

        if !bytes.is_empty() {
            let body = String::from_utf8(bytes.to_vec())
                .map_err(|_| ApiReply(ApiResponse::bad_request("Request body must be UTF-8")))?;
            event = event.with_body(body);
        }

        Ok(GatewayEvent(event))
    }
}
