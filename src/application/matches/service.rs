//! Match service: listing and unmatching
//!
//! Matches are created by the swipe path only; this service reads them and
//! tears them down on request of one of the two members.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{DomainError, DomainResult, Match, RepositoryProvider, UserProfile};
use crate::shared::PaginatedResult;

pub const DEFAULT_MATCH_PAGE_SIZE: u32 = 10;
pub const MAX_MATCH_PAGE_SIZE: u32 = 50;

/// A match as seen by one of its members
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub id: String,
    /// The other member
    pub matched_user: UserProfile,
    pub created_at: DateTime<Utc>,
}

pub struct MatchService {
    repos: Arc<dyn RepositoryProvider>,
}

impl MatchService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Matches of `user_id`, newest first. `page` is 0-indexed.
    pub async fn list_matches(
        &self,
        user_id: &str,
        page: u32,
        limit: Option<u32>,
    ) -> DomainResult<PaginatedResult<MatchSummary>> {
        let limit = limit.unwrap_or(DEFAULT_MATCH_PAGE_SIZE);
        if !(1..=MAX_MATCH_PAGE_SIZE).contains(&limit) {
            return Err(DomainError::Validation(format!(
                "limit must be between 1 and {}",
                MAX_MATCH_PAGE_SIZE
            )));
        }

        let matches = self.repos.matches();
        let total = matches.count_for_user(user_id).await?;
        let records = matches
            .find_for_user(user_id, PaginatedResult::<()>::offset(page, limit), limit as u64)
            .await?;

        let counterpart_ids: Vec<String> = records
            .iter()
            .filter_map(|m| m.pair.counterpart(user_id).map(str::to_string))
            .collect();
        let mut profiles: HashMap<String, UserProfile> = self
            .repos
            .users()
            .find_by_ids(&counterpart_ids)
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let items = records
            .into_iter()
            .filter_map(|m| {
                let other = m.pair.counterpart(user_id)?;
                let matched_user = profiles.remove(other)?;
                Some(MatchSummary {
                    id: m.id,
                    matched_user,
                    created_at: m.created_at,
                })
            })
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }

    /// A single match `user_id` belongs to.
    pub async fn get_match(&self, user_id: &str, match_id: &str) -> DomainResult<MatchSummary> {
        let m = self.find_membership(user_id, match_id).await?;
        let other = m
            .pair
            .counterpart(user_id)
            .ok_or_else(|| match_not_found(match_id))?;

        let matched_user = self
            .repos
            .users()
            .find_by_id(other)
            .await?
            .ok_or_else(|| DomainError::user_not_found(other))?;

        Ok(MatchSummary {
            id: m.id,
            matched_user,
            created_at: m.created_at,
        })
    }

    /// Delete a match `user_id` belongs to. Swipes stay, so neither side
    /// sees the other in discovery again.
    pub async fn unmatch(&self, user_id: &str, match_id: &str) -> DomainResult<()> {
        let m = self.find_membership(user_id, match_id).await?;
        self.repos.matches().delete(&m.id).await?;

        info!(user_id, match_id, "Users unmatched");
        Ok(())
    }

    async fn find_membership(&self, user_id: &str, match_id: &str) -> DomainResult<Match> {
        self.repos
            .matches()
            .find_by_id(match_id)
            .await?
            .filter(|m| m.involves(user_id))
            .ok_or_else(|| match_not_found(match_id))
    }
}

fn match_not_found(match_id: &str) -> DomainError {
    DomainError::NotFound {
        entity: "Match",
        field: "id",
        value: match_id.to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────
