//! Discovery service: ranked candidate feed
//!
//! Candidates are read with the strict filter first. When a filtered page
//! comes back too thin, the feed is topped up from the base filter so niche
//! filter combinations do not starve it.

use std::sync::Arc;

use tracing::{debug, info};

use super::scoring::match_score;
use crate::domain::{
    CandidateFilter, DiscoveryPreferences, DomainError, DomainResult, Gender, GenderPreference,
    PreferencesUpdate, RepositoryProvider, UserProfile,
};
use crate::shared::PaginatedResult;

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;
pub const MAX_LIMIT: u32 = 50;

/// Tunables for the discovery feed
#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Below this many strict results the relaxed fallback kicks in
    pub fallback_threshold: u32,
    pub default_limit: u32,
    /// Page size of the quick feed
    pub quick_limit: u32,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            fallback_threshold: 5,
            default_limit: 20,
            quick_limit: 5,
        }
    }
}

/// Filters a requester can pass to discovery
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilters {
    /// Explicit gender filter; overrides the stored preference. `All` means
    /// no gender restriction.
    pub gender: Option<GenderPreference>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub faculty: Option<String>,
    pub program: Option<String>,
    /// Page size, `1..=50`
    pub limit: Option<u32>,
    /// Drop candidates scoring 50 or less
    pub shared_interests_only: bool,
}

impl DiscoveryFilters {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(DomainError::Validation(format!(
                    "limit must be between 1 and {}",
                    MAX_LIMIT
                )));
            }
        }
        if self.min_age.is_some_and(|a| a < MIN_AGE) {
            return Err(DomainError::Validation(format!(
                "minAge must be at least {}",
                MIN_AGE
            )));
        }
        if self.max_age.is_some_and(|a| a > MAX_AGE) {
            return Err(DomainError::Validation(format!(
                "maxAge must be at most {}",
                MAX_AGE
            )));
        }
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err(DomainError::Validation(
                    "minAge must not exceed maxAge".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Candidate with its compatibility score
#[derive(Debug, Clone)]
pub struct ScoredProfile {
    pub profile: UserProfile,
    pub match_score: u32,
}

pub type DiscoveryPage = PaginatedResult<ScoredProfile>;

/// Whether the relaxed fallback applies to a strict page of `found` items.
pub fn should_relax(
    found: usize,
    threshold: u32,
    has_optional_filters: bool,
    shared_interests_only: bool,
) -> bool {
    found < threshold as usize && has_optional_filters && !shared_interests_only
}

pub struct DiscoveryService {
    repos: Arc<dyn RepositoryProvider>,
    settings: DiscoverySettings,
}

impl DiscoveryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, settings: DiscoverySettings) -> Self {
        Self { repos, settings }
    }

    /// Ranked candidates for `user_id`. `page` is 0-indexed.
    pub async fn get_recommendations(
        &self,
        user_id: &str,
        filters: &DiscoveryFilters,
        page: u32,
    ) -> DomainResult<DiscoveryPage> {
        filters.validate()?;
        let limit = filters.limit.unwrap_or(self.settings.default_limit);

        let requester = self
            .repos
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id))?;

        let mut excluded = self.repos.swipes().swiped_user_ids(user_id).await?;
        excluded.push(user_id.to_string());

        let gender = candidate_gender(filters, &requester.preferences);
        let strict = CandidateFilter {
            min_age: filters.min_age,
            max_age: filters.max_age,
            faculty: filters.faculty.clone(),
            program: filters.program.clone(),
            ..CandidateFilter::base(excluded, gender)
        };

        let users = self.repos.users();
        let offset = PaginatedResult::<()>::offset(page, limit);
        let mut candidates = users.find_candidates(&strict, offset, limit as u64).await?;
        let mut total = users.count_candidates(&strict).await?;

        let threshold = self.settings.fallback_threshold;
        if should_relax(
            candidates.len(),
            threshold,
            strict.has_optional(),
            filters.shared_interests_only,
        ) {
            info!(
                user_id,
                found = candidates.len(),
                "Few candidates under filters, expanding search criteria"
            );
            let relaxed = strict.relaxed();

            // Keep the strict hits out of the top-up so nobody appears twice.
            let mut top_up = relaxed.clone();
            top_up
                .exclude_ids
                .extend(candidates.iter().map(|c| c.id.clone()));
            let wanted = threshold as u64 - candidates.len() as u64;
            let extra = users.find_candidates(&top_up, 0, wanted).await?;
            candidates.extend(extra);

            total = users.count_candidates(&relaxed).await?;
        }

        let mut scored: Vec<ScoredProfile> = candidates
            .into_iter()
            .map(|profile| ScoredProfile {
                match_score: match_score(&requester, &profile),
                profile,
            })
            .collect();

        if filters.shared_interests_only {
            scored.retain(|s| s.match_score > 50);
        }

        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(user_id, page, returned = scored.len(), total, "Discovery page built");
        Ok(PaginatedResult::new(scored, total, page, limit))
    }

    /// Small unfiltered first page for the initial feed.
    pub async fn get_quick_recommendations(&self, user_id: &str) -> DomainResult<DiscoveryPage> {
        let filters = DiscoveryFilters {
            limit: Some(self.settings.quick_limit),
            ..Default::default()
        };
        self.get_recommendations(user_id, &filters, 0).await
    }

    /// Persist gender and age preferences onto the user record.
    pub async fn save_user_filters(
        &self,
        user_id: &str,
        update: &PreferencesUpdate,
    ) -> DomainResult<DiscoveryPreferences> {
        let saved = self
            .repos
            .users()
            .update_preferences(user_id, update)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id))?;

        info!(
            user_id,
            gender = saved.interested_in_gender.as_str(),
            "Discovery preferences updated"
        );
        Ok(saved)
    }
}

/// Explicit filter wins; otherwise the stored preference applies.
fn candidate_gender(filters: &DiscoveryFilters, prefs: &DiscoveryPreferences) -> Option<Gender> {
    filters
        .gender
        .unwrap_or(prefs.interested_in_gender)
        .required_gender()
}

// ── Tests ──────────────────────────────────────────────────────
