//! Interest catalogue handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::InterestService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse};
use crate::interfaces::http::dto::InterestDto;

#[derive(Clone)]
pub struct InterestHandlerState {
    pub interest_service: Arc<InterestService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/interests",
    tag = "Interests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Interest catalogue, ordered by name", body = ApiResponse<Vec<InterestDto>>)
    )
)]
pub async fn list_interests(
    State(state): State<InterestHandlerState>,
) -> Result<Json<ApiResponse<Vec<InterestDto>>>, ApiError> {
    let interests = state
        .interest_service
        .list_interests()
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(
        interests.into_iter().map(InterestDto::from).collect(),
    )))
}
