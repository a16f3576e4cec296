//! Shared HTTP building blocks: response envelope, pagination and error mapping

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::PaginatedResult;

/// Standard API response envelope.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty payload for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// One page of a listing. `page` is 0-indexed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T, U> From<PaginatedResult<U>> for PaginatedResponse<T>
where
    T: From<U>,
{
    fn from(r: PaginatedResult<U>) -> Self {
        Self {
            items: r.items.into_iter().map(T::from).collect(),
            total: r.total,
            page: r.page,
            limit: r.limit,
            total_pages: r.total_pages,
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::DuplicateInteraction { .. } => StatusCode::CONFLICT,
        DomainError::Validation(_) | DomainError::SelfInteraction(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a domain error onto its status code and envelope. Storage details
/// are logged, not returned.
pub fn error_response(e: DomainError) -> ApiError {
    let status = status_for(&e);
    let message = match &e {
        DomainError::Storage(detail) => {
            error!(error = %detail, "Storage failure while handling request");
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };
    (status, Json(ApiResponse::error(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        assert_eq!(
            status_for(&DomainError::user_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::DuplicateInteraction {
                swiper_id: "a".into(),
                swiped_id: "b".into(),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::SelfInteraction("a".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Storage("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let (status, Json(body)) = error_response(DomainError::Storage("secret path".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }

    #[test]
    fn paginated_response_keeps_page_metadata() {
        let result = PaginatedResult::new(vec![1u32, 2], 7, 1, 2);
        let resp: PaginatedResponse<u64> = result.into();
        assert_eq!(resp.items, vec![1u64, 2]);
        assert_eq!(resp.total_pages, 4);
        assert_eq!(resp.page, 1);
    }
}
