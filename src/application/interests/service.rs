//! Interest catalogue service

use std::sync::Arc;

use crate::domain::{DomainResult, Interest, RepositoryProvider};

pub struct InterestService {
    repos: Arc<dyn RepositoryProvider>,
}

impl InterestService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Whole catalogue, ordered by name.
    pub async fn list_interests(&self) -> DomainResult<Vec<Interest>> {
        self.repos.interests().find_all().await
    }
}
