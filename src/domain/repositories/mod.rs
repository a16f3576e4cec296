//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::interest::InterestRepository;
use super::matches::MatchRepository;
use super::swipe::SwipeRepository;
use super::user::UserRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Services hold an `Arc<dyn RepositoryProvider>` and request only the
/// repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_id("u1").await?;
///     let seen = repos.swipes().swiped_user_ids("u1").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn interests(&self) -> &dyn InterestRepository;
    fn swipes(&self) -> &dyn SwipeRepository;
    fn matches(&self) -> &dyn MatchRepository;
}
