//! Per-route request processing.
//!
//! Every route is a [`Route`] variant with a method and a path template. A
//! processor runs its filters (identity, body validation, path identifiers)
//! and then one repository call. [`dispatch`] turns the outcome into an
//! [`ApiResponse`], so the HTTP router and the one-shot `invoke` command share
//! the exact same behavior.

mod brands;
mod campaigns;
mod error;
mod filters;
mod influencers;
mod products;

use axum::http::Method;
use clap::ValueEnum;

use pinfluencer_core::api::{ApiEvent, ApiResponse};

use crate::state::AppState;

pub use error::ProcessError;

/// Every route the backend serves. The kebab-case variant name is the route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Route {
    ListBrands,
    GetBrand,
    ListBrandProducts,
    GetBrandMe,
    CreateBrandMe,
    UpdateBrandMe,
    UpdateBrandLogo,
    UpdateBrandHeaderImage,
    ListInfluencers,
    GetInfluencer,
    GetInfluencerMe,
    CreateInfluencerMe,
    UpdateInfluencerMe,
    UpdateInfluencerImage,
    ListProducts,
    GetProduct,
    ListMyProducts,
    CreateMyProduct,
    GetMyProduct,
    UpdateMyProduct,
    DeleteMyProduct,
    UpdateMyProductImage,
    ListCampaigns,
    GetCampaign,
    ListMyCampaigns,
    CreateMyCampaign,
    UpdateMyCampaign,
    UpdateMyCampaignState,
    UpdateMyCampaignImage,
    DeleteMyCampaign,
}

impl Route {
    pub const ALL: [Route; 30] = [
        Route::ListBrands,
        Route::GetBrand,
        Route::ListBrandProducts,
        Route::GetBrandMe,
        Route::CreateBrandMe,
        Route::UpdateBrandMe,
        Route::UpdateBrandLogo,
        Route::UpdateBrandHeaderImage,
        Route::ListInfluencers,
        Route::GetInfluencer,
        Route::GetInfluencerMe,
        Route::CreateInfluencerMe,
        Route::UpdateInfluencerMe,
        Route::UpdateInfluencerImage,
        Route::ListProducts,
        Route::GetProduct,
        Route::ListMyProducts,
        Route::CreateMyProduct,
        Route::GetMyProduct,
        Route::UpdateMyProduct,
        Route::DeleteMyProduct,
        Route::UpdateMyProductImage,
        Route::ListCampaigns,
        Route::GetCampaign,
        Route::ListMyCampaigns,
        Route::CreateMyCampaign,
        Route::UpdateMyCampaign,
        Route::UpdateMyCampaignState,
        Route::UpdateMyCampaignImage,
        Route::DeleteMyCampaign,
    ];

    pub fn method(self) -> Method {
        use Route::*;
        match self {
            ListBrands | GetBrand | ListBrandProducts | GetBrandMe | ListInfluencers
            | GetInfluencer | GetInfluencerMe | ListProducts | GetProduct | ListMyProducts
            | GetMyProduct | ListCampaigns | GetCampaign | ListMyCampaigns => Method::GET,
            CreateBrandMe | UpdateBrandLogo | UpdateBrandHeaderImage | CreateInfluencerMe
            | UpdateInfluencerImage | CreateMyProduct | UpdateMyProductImage
            | CreateMyCampaign | UpdateMyCampaignImage => Method::POST,
            UpdateBrandMe | UpdateInfluencerMe | UpdateMyProduct | UpdateMyCampaign => Method::PUT,
            UpdateMyCampaignState => Method::PATCH,
            DeleteMyProduct | DeleteMyCampaign => Method::DELETE,
        }
    }

    /// Path template, with `{name}` placeholders for path parameters.
    pub fn path(self) -> &'static str {
        use Route::*;
        match self {
            ListBrands => "/brands",
            GetBrand => "/brands/{brand_id}",
            ListBrandProducts => "/brands/{brand_id}/products",
            GetBrandMe | CreateBrandMe | UpdateBrandMe => "/brands/me",
            UpdateBrandLogo => "/brands/me/logo",
            UpdateBrandHeaderImage => "/brands/me/header-image",
            ListInfluencers => "/influencers",
            GetInfluencer => "/influencers/{influencer_id}",
            GetInfluencerMe | CreateInfluencerMe | UpdateInfluencerMe => "/influencers/me",
            UpdateInfluencerImage => "/influencers/me/image",
            ListProducts => "/products",
            GetProduct => "/products/{product_id}",
            ListMyProducts | CreateMyProduct => "/brands/me/products",
            GetMyProduct | UpdateMyProduct | DeleteMyProduct => "/brands/me/products/{product_id}",
            UpdateMyProductImage => "/brands/me/products/{product_id}/image",
            ListCampaigns => "/campaigns",
            GetCampaign => "/campaigns/{campaign_id}",
            ListMyCampaigns | CreateMyCampaign => "/brands/me/campaigns",
            UpdateMyCampaign | DeleteMyCampaign => "/brands/me/campaigns/{campaign_id}",
            UpdateMyCampaignState => "/brands/me/campaigns/{campaign_id}/state",
            UpdateMyCampaignImage => "/brands/me/campaigns/{campaign_id}/images/{slot}",
        }
    }
}

/// Runs the processor of `route` against `event`.
pub async fn dispatch(state: &AppState, route: Route, event: &ApiEvent) -> ApiResponse {
    use Route::*;

    tracing::debug!(?route, "Processing request");

    let result = match route {
        ListBrands => brands::list_brands(state, event).await,
        GetBrand => brands::get_brand(state, event).await,
        ListBrandProducts => brands::list_brand_products(state, event).await,
        GetBrandMe => brands::get_brand_me(state, event).await,
        CreateBrandMe => brands::create_brand_me(state, event).await,
        UpdateBrandMe => brands::update_brand_me(state, event).await,
        UpdateBrandLogo => brands::update_brand_logo(state, event).await,
        UpdateBrandHeaderImage => brands::update_brand_header_image(state, event).await,
        ListInfluencers => influencers::list_influencers(state, event).await,
        GetInfluencer => influencers::get_influencer(state, event).await,
        GetInfluencerMe => influencers::get_influencer_me(state, event).await,
        CreateInfluencerMe => influencers::create_influencer_me(state, event).await,
        UpdateInfluencerMe => influencers::update_influencer_me(state, event).await,
        UpdateInfluencerImage => influencers::update_influencer_image(state, event).await,
        ListProducts => products::list_products(state, event).await,
        GetProduct => products::get_product(state, event).await,
        ListMyProducts => products::list_my_products(state, event).await,
        CreateMyProduct => products::create_my_product(state, event).await,
        GetMyProduct => products::get_my_product(state, event).await,
        UpdateMyProduct => products::update_my_product(state, event).await,
        DeleteMyProduct => products::delete_my_product(state, event).await,
        UpdateMyProductImage => products::update_my_product_image(state, event).await,
        ListCampaigns => campaigns::list_campaigns(state, event).await,
        GetCampaign => campaigns::get_campaign(state, event).await,
        ListMyCampaigns => campaigns::list_my_campaigns(state, event).await,
        CreateMyCampaign => campaigns::create_my_campaign(state, event).await,
        UpdateMyCampaign => campaigns::update_my_campaign(state, event).await,
        UpdateMyCampaignState => campaigns::update_my_campaign_state(state, event).await,
        UpdateMyCampaignImage => campaigns::update_my_campaign_image(state, event).await,
        DeleteMyCampaign => campaigns::delete_my_campaign(state, event).await,
    };

    result.unwrap_or_else(ProcessError::into_response)
}
