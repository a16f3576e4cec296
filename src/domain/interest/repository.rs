//! Interest repository interface

use async_trait::async_trait;

use super::model::Interest;
use crate::domain::DomainResult;

#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// All catalogue entries, ordered by name
    async fn find_all(&self) -> DomainResult<Vec<Interest>>;

    /// Find a catalogue entry by its exact name
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Interest>>;

    /// Add a catalogue entry
    async fn save(&self, interest: Interest) -> DomainResult<()>;
}
