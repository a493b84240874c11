use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use pinfluencer_core::api::{ApiResponse, RESPONSE_HEADERS};

/// An [`ApiResponse`] rendered as an HTTP response with the fixed header set.
#[derive(Debug, Clone)]
pub struct ApiReply(pub ApiResponse);

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        let ApiReply(api) = self;
        let status =
            StatusCode::from_u16(api.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(api.body)).into_response();
        let headers = response.headers_mut();
        for (name, value) in RESPONSE_HEADERS {
            if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
                headers.insert(name, HeaderValue::from_static(value));
            }
        }
        response
    }
}
