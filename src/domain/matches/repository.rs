//! Match repository interface
//!
//! Matches are only created through `SwipeUnitOfWork`.

use async_trait::async_trait;

use super::model::{CanonicalPair, Match};
use crate::domain::DomainResult;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Match>>;

    async fn find_by_pair(&self, pair: &CanonicalPair) -> DomainResult<Option<Match>>;

    /// Number of matches the user belongs to
    async fn count_for_user(&self, user_id: &str) -> DomainResult<u64>;

    /// Matches the user belongs to, newest first
    async fn find_for_user(&self, user_id: &str, offset: u64, limit: u64)
        -> DomainResult<Vec<Match>>;

    /// Delete a match by ID
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
