//! User profile repository interface

use async_trait::async_trait;

use super::model::{CandidateFilter, DiscoveryPreferences, PreferencesUpdate, UserProfile};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new profile together with its interest assignments
    async fn save(&self, profile: UserProfile) -> DomainResult<()>;

    /// Find a profile (with interests) by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>>;

    /// Find profiles (with interests) for a set of IDs; missing IDs are skipped
    async fn find_by_ids(&self, ids: &[String]) -> DomainResult<Vec<UserProfile>>;

    async fn exists(&self, id: &str) -> DomainResult<bool>;

    /// Active users matching `filter`, in stable retrieval order
    async fn find_candidates(
        &self,
        filter: &CandidateFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<UserProfile>>;

    /// Number of active users matching `filter`
    async fn count_candidates(&self, filter: &CandidateFilter) -> DomainResult<u64>;

    /// Apply a preferences update. Returns `None` if the user does not exist.
    async fn update_preferences(
        &self,
        id: &str,
        update: &PreferencesUpdate,
    ) -> DomainResult<Option<DiscoveryPreferences>>;
}
