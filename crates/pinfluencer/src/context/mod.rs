//! HTTP request and response adapters.
//!
//! Bridges axum to the gateway-shaped [`ApiEvent`] / [`ApiResponse`] pair that
//! processors work with.
//!
//! [`ApiEvent`]: pinfluencer_core::api::ApiEvent
//! [`ApiResponse`]: pinfluencer_core::api::ApiResponse

mod extractor;
mod reply;

pub use extractor::{GatewayEvent, AUTH_USER_HEADER, MAX_BODY_BYTES};
pub use reply::ApiReply;
