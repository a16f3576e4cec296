//! Swipe DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::SwipeOutcome;
use crate::domain::{Match, Swipe, SwipeAction, SwipeStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeActionDto {
    Like,
    Dislike,
}

impl From<SwipeActionDto> for SwipeAction {
    fn from(a: SwipeActionDto) -> Self {
        match a {
            SwipeActionDto::Like => Self::Like,
            SwipeActionDto::Dislike => Self::Dislike,
        }
    }
}

impl From<SwipeAction> for SwipeActionDto {
    fn from(a: SwipeAction) -> Self {
        match a {
            SwipeAction::Like => Self::Like,
            SwipeAction::Dislike => Self::Dislike,
        }
    }
}

/// Swipe request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    /// User being swiped on
    #[validate(length(min = 1, max = 64))]
    pub swiped_user_id: String,
    pub action: SwipeActionDto,
}

/// A recorded swipe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwipeDto {
    pub id: String,
    pub swiper_user_id: String,
    pub swiped_user_id: String,
    pub action: SwipeActionDto,
    pub created_at: DateTime<Utc>,
}

impl From<Swipe> for SwipeDto {
    fn from(s: Swipe) -> Self {
        Self {
            id: s.id,
            swiper_user_id: s.swiper_user_id,
            swiped_user_id: s.swiped_user_id,
            action: s.action.into(),
            created_at: s.created_at,
        }
    }
}

/// Match created by a swipe, as its canonical pair (`userAId < userBId`)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMatchDto {
    pub id: String,
    pub user_a_id: String,
    pub user_b_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Match> for NewMatchDto {
    fn from(m: Match) -> Self {
        Self {
            user_a_id: m.pair.user_a_id().to_string(),
            user_b_id: m.pair.user_b_id().to_string(),
            id: m.id,
            created_at: m.created_at,
        }
    }
}

/// Result of a swipe
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SwipeResponse {
    pub swipe: SwipeDto,
    /// Set when this swipe completed a mutual like, `null` otherwise
    #[serde(rename = "match")]
    pub new_match: Option<NewMatchDto>,
}

impl From<SwipeOutcome> for SwipeResponse {
    fn from(o: SwipeOutcome) -> Self {
        Self {
            swipe: o.swipe.into(),
            new_match: o.new_match.map(NewMatchDto::from),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwipeStatsDto {
    pub likes_given: u64,
    pub dislikes_given: u64,
    pub matches_total: u64,
    /// Percentage of likes that became matches
    pub match_rate: u32,
}

impl From<SwipeStats> for SwipeStatsDto {
    fn from(s: SwipeStats) -> Self {
        Self {
            likes_given: s.likes_given,
            dislikes_given: s.dislikes_given,
            matches_total: s.matches_total,
            match_rate: s.match_rate_percent,
        }
    }
}
