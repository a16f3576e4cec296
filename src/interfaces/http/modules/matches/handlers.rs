//! Match API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use super::dto::{ListMatchesParams, MatchDto};
use crate::application::MatchService;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, EmptyData, PaginatedResponse,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct MatchHandlerState {
    pub match_service: Arc<MatchService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/matches",
    tag = "Matches",
    security(("bearer_auth" = [])),
    params(ListMatchesParams),
    responses(
        (status = 200, description = "Matches, newest first", body = ApiResponse<PaginatedResponse<MatchDto>>),
        (status = 400, description = "Page size out of range")
    )
)]
pub async fn list_matches(
    State(state): State<MatchHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListMatchesParams>,
) -> Result<Json<ApiResponse<PaginatedResponse<MatchDto>>>, ApiError> {
    let page = state
        .match_service
        .list_matches(&user.user_id, params.page, params.limit)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(page.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/matches/{id}",
    tag = "Matches",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match details", body = ApiResponse<MatchDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_match(
    State(state): State<MatchHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MatchDto>>, ApiError> {
    let summary = state
        .match_service
        .get_match(&user.user_id, &id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(summary.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/matches/{id}",
    tag = "Matches",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match removed", body = ApiResponse<EmptyData>),
        (status = 404, description = "Not found")
    )
)]
pub async fn unmatch(
    State(state): State<MatchHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state
        .match_service
        .unmatch(&user.user_id, &id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(EmptyData {})))
}
