//! Campaign routes.

use serde_json::json;

use pinfluencer_core::api::{ApiEvent, ApiResponse};
use pinfluencer_core::marketplace::{
    validate_campaign_request, validate_image_upload, CampaignRequest, CampaignStateRequest,
    ImageUploadRequest,
};

use super::filters::{image_slot, path_id, require_auth, valid_body};
use super::ProcessError;
use crate::state::AppState;

pub async fn list_campaigns(
    state: &AppState,
    _event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let campaigns = state.campaigns.load_collection().await?;
    Ok(ApiResponse::ok(&campaigns))
}

pub async fn get_campaign(state: &AppState, event: &ApiEvent) -> Result<ApiResponse, ProcessError> {
    let campaign_id = path_id(event, "campaign_id")?;
    let campaign = state.campaigns.load_by_id(campaign_id).await?;
    Ok(ApiResponse::ok(&campaign))
}

pub async fn list_my_campaigns(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let campaigns = state.campaigns.load_for_auth_brand(auth_user_id).await?;
    Ok(ApiResponse::ok(&campaigns))
}

pub async fn create_my_campaign(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: CampaignRequest = valid_body(event, validate_campaign_request)?;

    let campaign = state
        .campaigns
        .write_new_for_auth_brand(auth_user_id, request.into_campaign())
        .await?;

    tracing::info!(campaign_id = %campaign.id, brand_id = %campaign.brand_id, "Created campaign");
    Ok(ApiResponse::created(&campaign))
}

pub async fn update_my_campaign(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let campaign_id = path_id(event, "campaign_id")?;
    let request: CampaignRequest = valid_body(event, validate_campaign_request)?;

    let campaign = state
        .campaigns
        .update_campaign(auth_user_id, campaign_id, request)
        .await?;
    Ok(ApiResponse::ok(&campaign))
}

pub async fn update_my_campaign_state(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let campaign_id = path_id(event, "campaign_id")?;
    let request: CampaignStateRequest = valid_body(event, |_| Ok(()))?;

    let campaign = state
        .campaigns
        .update_campaign_state(auth_user_id, campaign_id, request.state)
        .await?;
    Ok(ApiResponse::ok(&campaign))
}

pub async fn update_my_campaign_image(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let campaign_id = path_id(event, "campaign_id")?;
    let slot = image_slot(event)?;
    let request: ImageUploadRequest = valid_body(event, validate_image_upload)?;

    let campaign = state
        .campaigns
        .update_product_image(auth_user_id, campaign_id, slot, &request.image_bytes)
        .await?;
    Ok(ApiResponse::ok(&campaign))
}

pub async fn delete_my_campaign(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let campaign_id = path_id(event, "campaign_id")?;

    state
        .campaigns
        .delete_for_auth_brand(auth_user_id, campaign_id)
        .await?;

    tracing::info!(campaign_id, "Deleted campaign");
    Ok(ApiResponse::ok(&json!({ "id": campaign_id })))
}
