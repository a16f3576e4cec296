//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    InterestRepository, MatchRepository, RepositoryProvider, SwipeRepository, UserRepository,
};

use super::interest_repository::SeaOrmInterestRepository;
use super::match_repository::SeaOrmMatchRepository;
use super::swipe_repository::SeaOrmSwipeRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let ids = repos.swipes().swiped_user_ids("user-1").await?;
/// let total = repos.matches().count_for_user("user-1").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    interests: SeaOrmInterestRepository,
    swipes: SeaOrmSwipeRepository,
    matches: SeaOrmMatchRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            interests: SeaOrmInterestRepository::new(db.clone()),
            swipes: SeaOrmSwipeRepository::new(db.clone()),
            matches: SeaOrmMatchRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn interests(&self) -> &dyn InterestRepository {
        &self.interests
    }

    fn swipes(&self) -> &dyn SwipeRepository {
        &self.swipes
    }

    fn matches(&self) -> &dyn MatchRepository {
        &self.matches
    }
}
