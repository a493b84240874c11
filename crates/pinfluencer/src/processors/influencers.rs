//! Influencer routes.

use pinfluencer_core::api::{ApiEvent, ApiResponse};
use pinfluencer_core::marketplace::{
    validate_image_upload, validate_influencer_request, ImageUploadRequest, InfluencerRequest,
};

use super::filters::{path_id, require_auth, valid_body};
use super::ProcessError;
use crate::state::AppState;

pub async fn list_influencers(
    state: &AppState,
    _event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let influencers = state.influencers.load_collection().await?;
    Ok(ApiResponse::ok(&influencers))
}

pub async fn get_influencer(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let influencer_id = path_id(event, "influencer_id")?;
    let influencer = state.influencers.load_by_id(influencer_id).await?;
    Ok(ApiResponse::ok(&influencer))
}

pub async fn get_influencer_me(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let influencer = state.influencers.load_for_auth_user(auth_user_id).await?;
    Ok(ApiResponse::ok(&influencer))
}

pub async fn create_influencer_me(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: InfluencerRequest = valid_body(event, validate_influencer_request)?;

    let influencer = state
        .influencers
        .write_new_for_auth_user(auth_user_id, request.into_influencer())
        .await?;

    tracing::info!(influencer_id = %influencer.id, auth_user_id, "Created influencer");
    Ok(ApiResponse::created(&influencer))
}

pub async fn update_influencer_me(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: InfluencerRequest = valid_body(event, validate_influencer_request)?;

    let influencer = state
        .influencers
        .update_for_auth_user(auth_user_id, request)
        .await?;
    Ok(ApiResponse::ok(&influencer))
}

pub async fn update_influencer_image(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: ImageUploadRequest = valid_body(event, validate_image_upload)?;

    let influencer = state
        .influencers
        .update_image_for_auth_user(auth_user_id, &request.image_bytes)
        .await?;
    Ok(ApiResponse::ok(&influencer))
}
