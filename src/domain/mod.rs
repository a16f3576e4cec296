//! Domain layer: entities, value types and repository ports.
//!
//! Nothing in here knows about the ORM or HTTP.

pub mod interest;
pub mod matches;
pub mod repositories;
pub mod swipe;
pub mod user;

pub use interest::{Interest, InterestRepository};
pub use matches::{CanonicalPair, Match, MatchRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use swipe::{Swipe, SwipeAction, SwipeRepository, SwipeStats, SwipeUnitOfWork};
pub use user::{
    CandidateFilter, DiscoveryPreferences, Gender, GenderPreference, PreferencesUpdate,
    UserProfile, UserRepository,
};

pub use crate::shared::errors::DomainError;
