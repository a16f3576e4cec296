//! Swipe API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{SwipeRequest, SwipeResponse, SwipeStatsDto};
use crate::application::SwipeService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct SwipeHandlerState {
    pub swipe_service: Arc<SwipeService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/swipes",
    tag = "Swipes",
    security(("bearer_auth" = [])),
    request_body = SwipeRequest,
    responses(
        (status = 201, description = "Swipe recorded", body = ApiResponse<SwipeResponse>),
        (status = 400, description = "Self swipe"),
        (status = 404, description = "Swiping or target user not found"),
        (status = 409, description = "Already swiped on this user"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_swipe(
    State(state): State<SwipeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<SwipeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SwipeResponse>>), ApiError> {
    let outcome = state
        .swipe_service
        .record_swipe(&user.user_id, &request.swiped_user_id, request.action.into())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SwipeResponse::from(outcome))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/swipes/stats",
    tag = "Swipes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Swipe statistics", body = ApiResponse<SwipeStatsDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_swipe_stats(
    State(state): State<SwipeHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<SwipeStatsDto>>, ApiError> {
    let stats = state
        .swipe_service
        .get_swipe_statistics(&user.user_id)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(stats.into())))
}
