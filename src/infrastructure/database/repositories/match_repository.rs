//! SeaORM implementation of MatchRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use super::db_err;
use crate::domain::{CanonicalPair, DomainError, DomainResult, Match, MatchRepository};
use crate::infrastructure::database::entities::user_match;

pub struct SeaOrmMatchRepository {
    db: DatabaseConnection,
}

impl SeaOrmMatchRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: user_match::Model) -> Match {
    Match {
        id: m.id,
        pair: CanonicalPair::new(m.user_a_id, m.user_b_id),
        created_at: m.created_at,
    }
}

fn member_of(user_id: &str) -> Condition {
    Condition::any()
        .add(user_match::Column::UserAId.eq(user_id))
        .add(user_match::Column::UserBId.eq(user_id))
}

#[async_trait]
impl MatchRepository for SeaOrmMatchRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Match>> {
        let model = user_match::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_pair(&self, pair: &CanonicalPair) -> DomainResult<Option<Match>> {
        let model = user_match::Entity::find()
            .filter(user_match::Column::UserAId.eq(pair.user_a_id()))
            .filter(user_match::Column::UserBId.eq(pair.user_b_id()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count_for_user(&self, user_id: &str) -> DomainResult<u64> {
        user_match::Entity::find()
            .filter(member_of(user_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_for_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<Match>> {
        let models = user_match::Entity::find()
            .filter(member_of(user_id))
            .order_by_desc(user_match::Column::CreatedAt)
            .order_by_asc(user_match::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        debug!("Deleting match: {}", id);

        let result = user_match::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Match",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
