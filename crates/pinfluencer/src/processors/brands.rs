//! Brand routes: the public directory and the caller's own brand.

use pinfluencer_core::api::{ApiEvent, ApiResponse};
use pinfluencer_core::marketplace::{
    validate_brand_request, validate_image_upload, BrandRequest, ImageUploadRequest,
};

use super::filters::{path_id, require_auth, valid_body};
use super::ProcessError;
use crate::state::AppState;

pub async fn list_brands(state: &AppState, _event: &ApiEvent) -> Result<ApiResponse, ProcessError> {
    let brands = state.brands.load_collection().await?;
    Ok(ApiResponse::ok(&brands))
}

pub async fn get_brand(state: &AppState, event: &ApiEvent) -> Result<ApiResponse, ProcessError> {
    let brand_id = path_id(event, "brand_id")?;
    let brand = state.brands.load_by_id(brand_id).await?;
    Ok(ApiResponse::ok(&brand))
}

/// Lists the products of a brand. An unknown brand is a 404, not an empty list.
pub async fn list_brand_products(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let brand_id = path_id(event, "brand_id")?;
    state.brands.load_by_id(brand_id).await?;
    let products = state.products.load_all_products_for_brand(brand_id).await?;
    Ok(ApiResponse::ok(&products))
}

pub async fn get_brand_me(state: &AppState, event: &ApiEvent) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let brand = state.brands.load_for_auth_user(auth_user_id).await?;
    Ok(ApiResponse::ok(&brand))
}

pub async fn create_brand_me(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: BrandRequest = valid_body(event, validate_brand_request)?;

    let brand = state
        .brands
        .write_new_for_auth_user(auth_user_id, request.into_brand())
        .await?;

    tracing::info!(brand_id = %brand.id, auth_user_id, "Created brand");
    Ok(ApiResponse::created(&brand))
}

pub async fn update_brand_me(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: BrandRequest = valid_body(event, validate_brand_request)?;

    let brand = state
        .brands
        .update_for_auth_user(auth_user_id, request)
        .await?;
    Ok(ApiResponse::ok(&brand))
}

pub async fn update_brand_logo(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: ImageUploadRequest = valid_body(event, validate_image_upload)?;

    let brand = state
        .brands
        .update_logo_for_auth_user(auth_user_id, &request.image_bytes)
        .await?;
    Ok(ApiResponse::ok(&brand))
}

pub async fn update_brand_header_image(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: ImageUploadRequest = valid_body(event, validate_image_upload)?;

    let brand = state
        .brands
        .update_header_image_for_auth_user(auth_user_id, &request.image_bytes)
        .await?;
    Ok(ApiResponse::ok(&brand))
}
