//! Inbound event and outbound response envelope shared by every route.

mod event;
mod response;

pub use event::{ApiEvent, Authorizer, JwtAuthorizer, RequestContext, AUTH_CLAIM};
pub use response::{ApiResponse, RESPONSE_HEADERS};
