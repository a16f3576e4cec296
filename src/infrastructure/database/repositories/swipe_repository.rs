//! SeaORM implementation of SwipeRepository and the swipe unit of work
//!
//! The unit of work wraps one database transaction. The match insert runs
//! inside a savepoint so that losing the race on the canonical pair only
//! undoes that insert, not the swipe written before it.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set, SqlErr, TransactionTrait,
};

use super::db_err;
use crate::domain::{
    DomainError, DomainResult, Match, Swipe, SwipeAction, SwipeRepository, SwipeUnitOfWork,
};
use crate::infrastructure::database::entities::{swipe, user_match};

pub struct SeaOrmSwipeRepository {
    db: DatabaseConnection,
}

impl SeaOrmSwipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn action_to_db(a: SwipeAction) -> swipe::SwipeAction {
    match a {
        SwipeAction::Like => swipe::SwipeAction::Like,
        SwipeAction::Dislike => swipe::SwipeAction::Dislike,
    }
}

fn model_to_domain(m: swipe::Model) -> Swipe {
    Swipe {
        id: m.id,
        swiper_user_id: m.swiper_user_id,
        swiped_user_id: m.swiped_user_id,
        action: match m.action {
            swipe::SwipeAction::Like => SwipeAction::Like,
            swipe::SwipeAction::Dislike => SwipeAction::Dislike,
        },
        created_at: m.created_at,
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

async fn find_pair<C: ConnectionTrait>(
    conn: &C,
    swiper_user_id: &str,
    swiped_user_id: &str,
) -> DomainResult<Option<Swipe>> {
    let model = swipe::Entity::find()
        .filter(swipe::Column::SwiperUserId.eq(swiper_user_id))
        .filter(swipe::Column::SwipedUserId.eq(swiped_user_id))
        .one(conn)
        .await
        .map_err(db_err)?;
    Ok(model.map(model_to_domain))
}

// ── SwipeRepository impl ────────────────────────────────────────

#[async_trait]
impl SwipeRepository for SeaOrmSwipeRepository {
    async fn find(
        &self,
        swiper_user_id: &str,
        swiped_user_id: &str,
    ) -> DomainResult<Option<Swipe>> {
        find_pair(&self.db, swiper_user_id, swiped_user_id).await
    }

    async fn swiped_user_ids(&self, swiper_user_id: &str) -> DomainResult<Vec<String>> {
        swipe::Entity::find()
            .select_only()
            .column(swipe::Column::SwipedUserId)
            .filter(swipe::Column::SwiperUserId.eq(swiper_user_id))
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_given(&self, swiper_user_id: &str, action: SwipeAction) -> DomainResult<u64> {
        swipe::Entity::find()
            .filter(swipe::Column::SwiperUserId.eq(swiper_user_id))
            .filter(swipe::Column::Action.eq(action_to_db(action)))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn begin(&self) -> DomainResult<Box<dyn SwipeUnitOfWork>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        Ok(Box::new(SeaOrmSwipeUnitOfWork { txn }))
    }
}

// ── Unit of work ────────────────────────────────────────────────

/// Dropping without `commit` rolls the transaction back.
pub struct SeaOrmSwipeUnitOfWork {
    txn: DatabaseTransaction,
}

#[async_trait]
impl SwipeUnitOfWork for SeaOrmSwipeUnitOfWork {
    async fn insert_swipe(&self, s: &Swipe) -> DomainResult<()> {
        debug!(
            "Inserting swipe {} ({} -> {}, {})",
            s.id, s.swiper_user_id, s.swiped_user_id, s.action
        );

        let model = swipe::ActiveModel {
            id: Set(s.id.clone()),
            swiper_user_id: Set(s.swiper_user_id.clone()),
            swiped_user_id: Set(s.swiped_user_id.clone()),
            action: Set(action_to_db(s.action)),
            created_at: Set(s.created_at),
        };

        match model.insert(&self.txn).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(DomainError::DuplicateInteraction {
                swiper_id: s.swiper_user_id.clone(),
                swiped_id: s.swiped_user_id.clone(),
            }),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_swipe(
        &self,
        swiper_user_id: &str,
        swiped_user_id: &str,
    ) -> DomainResult<Option<Swipe>> {
        find_pair(&self.txn, swiper_user_id, swiped_user_id).await
    }

    async fn insert_match_if_absent(&self, m: &Match) -> DomainResult<bool> {
        let savepoint = self.txn.begin().await.map_err(db_err)?;

        let model = user_match::ActiveModel {
            id: Set(m.id.clone()),
            user_a_id: Set(m.pair.user_a_id().to_string()),
            user_b_id: Set(m.pair.user_b_id().to_string()),
            created_at: Set(m.created_at),
        };

        match model.insert(&savepoint).await {
            Ok(_) => {
                savepoint.commit().await.map_err(db_err)?;
                Ok(true)
            }
            Err(e) if is_unique_violation(&e) => {
                debug!(
                    "Match for ({}, {}) already stored",
                    m.pair.user_a_id(),
                    m.pair.user_b_id()
                );
                savepoint.rollback().await.map_err(db_err)?;
                Ok(false)
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.txn.commit().await.map_err(db_err)
    }
}
