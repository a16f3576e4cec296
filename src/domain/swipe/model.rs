//! Swipe domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decision a user makes about another user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SwipeAction {
    Like,
    Dislike,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Dislike => "DISLIKE",
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One-time directional decision. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swipe {
    pub id: String,
    pub swiper_user_id: String,
    pub swiped_user_id: String,
    pub action: SwipeAction,
    pub created_at: DateTime<Utc>,
}

impl Swipe {
    pub fn new(
        swiper_user_id: impl Into<String>,
        swiped_user_id: impl Into<String>,
        action: SwipeAction,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            swiper_user_id: swiper_user_id.into(),
            swiped_user_id: swiped_user_id.into(),
            action,
            created_at: Utc::now(),
        }
    }

    pub fn is_like(&self) -> bool {
        self.action == SwipeAction::Like
    }
}

/// Swipe activity summary for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeStats {
    pub likes_given: u64,
    pub dislikes_given: u64,
    pub matches_total: u64,
    /// Share of likes that became matches, in whole percent
    pub match_rate_percent: u32,
}

impl SwipeStats {
    pub fn from_counts(likes_given: u64, dislikes_given: u64, matches_total: u64) -> Self {
        let match_rate_percent = if likes_given == 0 {
            0
        } else {
            (matches_total as f64 / likes_given as f64 * 100.0).round() as u32
        };
        Self {
            likes_given,
            dislikes_given,
            matches_total,
            match_rate_percent,
        }
    }
}
