//! Product routes: the public catalogue and the caller's brand products.

use serde_json::json;

use pinfluencer_core::api::{ApiEvent, ApiResponse};
use pinfluencer_core::marketplace::{
    validate_image_upload, validate_product_request, ImageUploadRequest, ProductRequest,
};

use super::filters::{path_id, require_auth, valid_body};
use super::ProcessError;
use crate::state::AppState;

pub async fn list_products(
    state: &AppState,
    _event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let products = state.products.load_collection().await?;
    Ok(ApiResponse::ok(&products))
}

pub async fn get_product(state: &AppState, event: &ApiEvent) -> Result<ApiResponse, ProcessError> {
    let product_id = path_id(event, "product_id")?;
    let product = state.products.load_by_id(product_id).await?;
    Ok(ApiResponse::ok(&product))
}

pub async fn list_my_products(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let products = state.products.load_for_auth_brand(auth_user_id).await?;
    Ok(ApiResponse::ok(&products))
}

pub async fn create_my_product(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let request: ProductRequest = valid_body(event, validate_product_request)?;

    let product = state
        .products
        .write_new_for_auth_brand(auth_user_id, request.into_product())
        .await?;

    tracing::info!(product_id = %product.id, brand_id = %product.brand_id, "Created product");
    Ok(ApiResponse::created(&product))
}

pub async fn get_my_product(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let product_id = path_id(event, "product_id")?;

    let product = state
        .products
        .load_by_id_for_auth_brand(auth_user_id, product_id)
        .await?;
    Ok(ApiResponse::ok(&product))
}

pub async fn update_my_product(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let product_id = path_id(event, "product_id")?;
    let request: ProductRequest = valid_body(event, validate_product_request)?;

    let product = state
        .products
        .update_for_auth_brand(auth_user_id, product_id, request)
        .await?;
    Ok(ApiResponse::ok(&product))
}

pub async fn delete_my_product(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let product_id = path_id(event, "product_id")?;

    state
        .products
        .delete_for_auth_brand(auth_user_id, product_id)
        .await?;

    tracing::info!(product_id, "Deleted product");
    Ok(ApiResponse::ok(&json!({ "id": product_id })))
}

pub async fn update_my_product_image(
    state: &AppState,
    event: &ApiEvent,
) -> Result<ApiResponse, ProcessError> {
    let auth_user_id = require_auth(event)?;
    let product_id = path_id(event, "product_id")?;
    let request: ImageUploadRequest = valid_body(event, validate_image_upload)?;

    let product = state
        .products
        .update_image_for_auth_brand(auth_user_id, product_id, &request.image_bytes)
        .await?;
    Ok(ApiResponse::ok(&product))
}
