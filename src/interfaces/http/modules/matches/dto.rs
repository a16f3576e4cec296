//! Match DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::MatchSummary;
use crate::interfaces::http::dto::ProfileDto;

/// A match from the caller's side
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: String,
    /// The other member of the match
    pub matched_user: ProfileDto,
    pub created_at: DateTime<Utc>,
}

impl From<MatchSummary> for MatchDto {
    fn from(m: MatchSummary) -> Self {
        Self {
            id: m.id,
            matched_user: m.matched_user.into(),
            created_at: m.created_at,
        }
    }
}

/// Match listing query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMatchesParams {
    /// Page number, starting at 0
    #[serde(default)]
    pub page: u32,
    /// Page size (1–50). Default: 10
    pub limit: Option<u32>,
}
