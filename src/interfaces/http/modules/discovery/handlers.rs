//! Discovery API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};

use super::dto::{DiscoveryPageDto, DiscoveryQuery, PreferencesDto, SaveFiltersRequest};
use crate::application::DiscoveryService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct DiscoveryHandlerState {
    pub discovery_service: Arc<DiscoveryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/discovery",
    tag = "Discovery",
    security(("bearer_auth" = [])),
    params(DiscoveryQuery),
    responses(
        (status = 200, description = "Ranked candidates", body = ApiResponse<DiscoveryPageDto>),
        (status = 400, description = "Filter out of range"),
        (status = 404, description = "Requesting user not found")
    )
)]
pub async fn get_recommendations(
    State(state): State<DiscoveryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<DiscoveryQuery>,
) -> Result<Json<ApiResponse<DiscoveryPageDto>>, ApiError> {
    let page = state
        .discovery_service
        .get_recommendations(&user.user_id, &query.filters(), query.page)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/discovery/feed",
    tag = "Discovery",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Small unfiltered first page", body = ApiResponse<DiscoveryPageDto>),
        (status = 404, description = "Requesting user not found")
    )
)]
pub async fn get_quick_recommendations(
    State(state): State<DiscoveryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<DiscoveryPageDto>>, ApiError> {
    let page = state
        .discovery_service
        .get_quick_recommendations(&user.user_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/discovery/filters",
    tag = "Discovery",
    security(("bearer_auth" = [])),
    request_body = SaveFiltersRequest,
    responses(
        (status = 200, description = "Preferences saved", body = ApiResponse<PreferencesDto>),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn save_filters(
    State(state): State<DiscoveryHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SaveFiltersRequest>,
) -> Result<Json<ApiResponse<PreferencesDto>>, ApiError> {
    let saved = state
        .discovery_service
        .save_user_filters(&user.user_id, &request.into())
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(saved.into())))
}
