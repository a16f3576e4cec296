//! Swipe repository and the swipe/match unit of work

use async_trait::async_trait;

use super::model::{Swipe, SwipeAction};
use crate::domain::matches::Match;
use crate::domain::DomainResult;

#[async_trait]
pub trait SwipeRepository: Send + Sync {
    /// Find the swipe for an ordered (swiper, swiped) pair
    async fn find(&self, swiper_user_id: &str, swiped_user_id: &str)
        -> DomainResult<Option<Swipe>>;

    /// IDs of every user `swiper_user_id` has swiped on, whatever the action
    async fn swiped_user_ids(&self, swiper_user_id: &str) -> DomainResult<Vec<String>>;

    /// Number of swipes with `action` given by `swiper_user_id`
    async fn count_given(&self, swiper_user_id: &str, action: SwipeAction) -> DomainResult<u64>;

    /// Open an atomic unit of work for the swipe write path
    async fn begin(&self) -> DomainResult<Box<dyn SwipeUnitOfWork>>;
}

/// Atomic unit spanning the swipe insert, the mirror lookup and the
/// conditional match insert. Dropping it without `commit` discards every
/// write made through it.
#[async_trait]
pub trait SwipeUnitOfWork: Send {
    /// Insert a swipe. A stored swipe for the same ordered pair yields
    /// `DomainError::DuplicateInteraction`.
    async fn insert_swipe(&self, swipe: &Swipe) -> DomainResult<()>;

    /// Read a swipe as seen inside this unit
    async fn find_swipe(
        &self,
        swiper_user_id: &str,
        swiped_user_id: &str,
    ) -> DomainResult<Option<Swipe>>;

    /// Insert a match for its canonical pair. Returns `false` when a match
    /// for the pair already exists; the unit stays usable in that case.
    async fn insert_match_if_absent(&self, m: &Match) -> DomainResult<bool>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}
