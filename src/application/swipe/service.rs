//! Swipe service: records swipes and forms matches
//!
//! A swipe is written together with the match it may complete in a single
//! unit of work. Duplicate matches are prevented by the canonical pair's
//! uniqueness constraint, not by in-process locking.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CanonicalPair, DomainError, DomainResult, Match, RepositoryProvider, Swipe, SwipeAction,
    SwipeStats,
};

/// Result of a recorded swipe
#[derive(Debug, Clone)]
pub struct SwipeOutcome {
    pub swipe: Swipe,
    /// Set only when this swipe completed a mutual like
    pub new_match: Option<Match>,
}

pub struct SwipeService {
    repos: Arc<dyn RepositoryProvider>,
}

impl SwipeService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record `actor_id`'s decision about `target_id`.
    ///
    /// Preconditions are checked before anything is written: no self swipe,
    /// both users exist, and the ordered pair has not been swiped before.
    pub async fn record_swipe(
        &self,
        actor_id: &str,
        target_id: &str,
        action: SwipeAction,
    ) -> DomainResult<SwipeOutcome> {
        if actor_id == target_id {
            return Err(DomainError::SelfInteraction(actor_id.to_string()));
        }

        if !self.repos.users().exists(target_id).await? {
            return Err(DomainError::user_not_found(target_id));
        }

        // A token can outlive its account.
        if !self.repos.users().exists(actor_id).await? {
            return Err(DomainError::user_not_found(actor_id));
        }

        if self.repos.swipes().find(actor_id, target_id).await?.is_some() {
            return Err(DomainError::DuplicateInteraction {
                swiper_id: actor_id.to_string(),
                swiped_id: target_id.to_string(),
            });
        }

        let swipe = Swipe::new(actor_id, target_id, action);

        let uow = self.repos.swipes().begin().await?;
        uow.insert_swipe(&swipe).await?;

        let mut new_match = None;
        if action == SwipeAction::Like {
            let mirror = uow.find_swipe(target_id, actor_id).await?;
            if mirror.as_ref().is_some_and(Swipe::is_like) {
                let candidate = Match::new(CanonicalPair::new(actor_id, target_id));
                if uow.insert_match_if_absent(&candidate).await? {
                    new_match = Some(candidate);
                } else {
                    debug!(
                        swiper_id = %actor_id,
                        swiped_id = %target_id,
                        "Match for pair already exists, keeping swipe only"
                    );
                }
            }
        }

        uow.commit().await?;

        metrics::counter!("swipes_recorded_total", "action" => action.as_str()).increment(1);
        if let Some(m) = &new_match {
            metrics::counter!("matches_created_total").increment(1);
            info!(
                match_id = %m.id,
                user_a = %m.pair.user_a_id(),
                user_b = %m.pair.user_b_id(),
                "Mutual like, match created"
            );
        } else {
            debug!(swiper_id = %actor_id, swiped_id = %target_id, %action, "Swipe recorded");
        }

        Ok(SwipeOutcome { swipe, new_match })
    }

    /// Likes and dislikes given, matches held and the resulting match rate.
    pub async fn get_swipe_statistics(&self, user_id: &str) -> DomainResult<SwipeStats> {
        let swipes = self.repos.swipes();
        let likes = swipes.count_given(user_id, SwipeAction::Like).await?;
        let dislikes = swipes.count_given(user_id, SwipeAction::Dislike).await?;
        let matches = self.repos.matches().count_for_user(user_id).await?;

        Ok(SwipeStats::from_counts(likes, dislikes, matches))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use crate::infrastructure::database::test_support::{repositories, save_user, FileStore};
    use tokio::task::JoinSet;

    async fn setup() -> (Arc<dyn RepositoryProvider>, SwipeService) {
        let repos = repositories().await;
        let service = SwipeService::new(repos.clone());
        (repos, service)
    }

    #[tokio::test]
    async fn mutual_like_creates_one_canonical_match() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        let first = service.record_swipe(&b.id, &a.id, SwipeAction::Like).await.unwrap();
        assert!(!first.new_match.is_some());

        let second = service.record_swipe(&a.id, &b.id, SwipeAction::Like).await.unwrap();
        let m = second.new_match.expect("mutual like should match");

        let expected = CanonicalPair::new(a.id.clone(), b.id.clone());
        assert_eq!(m.pair, expected);
        assert!(m.pair.user_a_id() < m.pair.user_b_id());

        let stored = repos.matches().find_by_pair(&expected).await.unwrap().unwrap();
        assert_eq!(stored.id, m.id);
        assert_eq!(repos.matches().count_for_user(&a.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn like_then_dislike_creates_no_match() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        service.record_swipe(&a.id, &b.id, SwipeAction::Like).await.unwrap();
        let out = service.record_swipe(&b.id, &a.id, SwipeAction::Dislike).await.unwrap();

        assert!(!out.new_match.is_some());
        assert_eq!(repos.matches().count_for_user(&a.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dislike_then_like_creates_no_match() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        service.record_swipe(&a.id, &b.id, SwipeAction::Dislike).await.unwrap();
        let out = service.record_swipe(&b.id, &a.id, SwipeAction::Like).await.unwrap();

        assert!(!out.new_match.is_some());
    }

    #[tokio::test]
    async fn second_swipe_on_same_pair_is_duplicate() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        let first = service.record_swipe(&a.id, &b.id, SwipeAction::Dislike).await.unwrap();
        let err = service
            .record_swipe(&a.id, &b.id, SwipeAction::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateInteraction { .. }));

        let stored = repos.swipes().find(&a.id, &b.id).await.unwrap().unwrap();
        assert_eq!(stored.id, first.swipe.id);
        assert_eq!(stored.action, SwipeAction::Dislike);
    }

    #[tokio::test]
    async fn self_swipe_is_rejected_before_any_write() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;

        let err = service
            .record_swipe(&a.id, &a.id, SwipeAction::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SelfInteraction(_)));
        assert!(repos.swipes().find(&a.id, &a.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_target_is_not_found() {
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;

        let err = service
            .record_swipe(&a.id, "missing-user", SwipeAction::Like)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
        assert!(repos.swipes().swiped_user_ids(&a.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_actor_is_not_found() {
        let (repos, service) = setup().await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        let err = service
            .record_swipe("deleted-account", &b.id, SwipeAction::Like)
            .await
            .unwrap_err();
        match err {
            DomainError::NotFound { entity, value, .. } => {
                assert_eq!(entity, "User");
                assert_eq!(value, "deleted-account");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(repos
            .swipes()
            .find("deleted-account", &b.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn existing_match_for_pair_keeps_the_swipe() {
        // Another writer already stored the match for this pair.
        let (repos, service) = setup().await;
        let a = save_user(repos.as_ref(), "Ayu", Gender::Female).await;
        let b = save_user(repos.as_ref(), "Bima", Gender::Male).await;

        let uow = repos.swipes().begin().await.unwrap();
        uow.insert_swipe(&Swipe::new(&a.id, &b.id, SwipeAction::Like))
            .await
            .unwrap();
        let winner = Match::new(CanonicalPair::new(&a.id, &b.id));
        assert!(uow.insert_match_if_absent(&winner).await.unwrap());
        uow.commit().await.unwrap();

        let out = service.record_swipe(&b.id, &a.id, SwipeAction::Like).await.unwrap();
        assert!(!out.new_match.is_some());
        assert!(repos.swipes().find(&b.id, &a.id).await.unwrap().is_some());

        let pair = CanonicalPair::new(&a.id, &b.id);
        let stored = repos.matches().find_by_pair(&pair).await.unwrap().unwrap();
        assert_eq!(stored.id, winner.id);
        assert_eq!(repos.matches().count_for_user(&a.id).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_mutual_likes_create_exactly_one_match() {
        let store = FileStore::new("mutual-likes").await;
        let repos = store.repositories();
        let service = Arc::new(SwipeService::new(repos.clone()));

        let mut pairs = Vec::new();
        for i in 0..20 {
            let a = save_user(repos.as_ref(), &format!("Ayu {i}"), Gender::Female).await;
            let b = save_user(repos.as_ref(), &format!("Bima {i}"), Gender::Male).await;
            pairs.push((a.id, b.id));
        }

        let mut tasks = JoinSet::new();
        for (a, b) in &pairs {
            for (actor, target) in [(a.clone(), b.clone()), (b.clone(), a.clone())] {
                let service = service.clone();
                tasks.spawn(async move {
                    service.record_swipe(&actor, &target, SwipeAction::Like).await
                });
            }
        }

        let mut created = 0;
        while let Some(joined) = tasks.join_next().await {
            if joined.unwrap().unwrap().new_match.is_some() {
                created += 1;
            }
        }
        assert_eq!(created, pairs.len());

        for (a, b) in &pairs {
            assert_eq!(repos.matches().count_for_user(a).await.unwrap(), 1);
            assert_eq!(repos.matches().count_for_user(b).await.unwrap(), 1);
        }
    }

    #[tokio::test]
    async fn statistics_count_likes_dislikes_and_matches() {
        let (repos, service) = setup().await;
        let me = save_user(repos.as_ref(), "Citra", Gender::Female).await;

        let mut others = Vec::new();
        for name in ["Dedi", "Eko", "Fajar", "Gilang"] {
            others.push(save_user(repos.as_ref(), name, Gender::Male).await);
        }

        service.record_swipe(&others[0].id, &me.id, SwipeAction::Like).await.unwrap();
        service.record_swipe(&me.id, &others[0].id, SwipeAction::Like).await.unwrap();
        service.record_swipe(&me.id, &others[1].id, SwipeAction::Like).await.unwrap();
        service.record_swipe(&me.id, &others[2].id, SwipeAction::Like).await.unwrap();
        service.record_swipe(&me.id, &others[3].id, SwipeAction::Dislike).await.unwrap();

        let stats = service.get_swipe_statistics(&me.id).await.unwrap();
        assert_eq!(stats.likes_given, 3);
        assert_eq!(stats.dislikes_given, 1);
        assert_eq!(stats.matches_total, 1);
        assert_eq!(stats.match_rate_percent, 33);
    }

    #[tokio::test]
    async fn statistics_for_idle_user_are_zero() {
        let (repos, service) = setup().await;
        let me = save_user(repos.as_ref(), "Citra", Gender::Female).await;

        let stats = service.get_swipe_statistics(&me.id).await.unwrap();
        assert_eq!(stats, SwipeStats::from_counts(0, 0, 0));
        assert_eq!(stats.match_rate_percent, 0);
    }
}
