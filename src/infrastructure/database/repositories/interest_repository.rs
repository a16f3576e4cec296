//! SeaORM implementation of InterestRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{DomainResult, Interest, InterestRepository};
use crate::infrastructure::database::entities::interest;

pub struct SeaOrmInterestRepository {
    db: DatabaseConnection,
}

impl SeaOrmInterestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_domain(m: interest::Model) -> Interest {
    Interest {
        id: m.id,
        name: m.name,
    }
}

#[async_trait]
impl InterestRepository for SeaOrmInterestRepository {
    async fn find_all(&self) -> DomainResult<Vec<Interest>> {
        let models = interest::Entity::find()
            .order_by_asc(interest::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Interest>> {
        let model = interest::Entity::find()
            .filter(interest::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, i: Interest) -> DomainResult<()> {
        debug!("Saving interest: {} ({})", i.name, i.id);

        let model = interest::ActiveModel {
            id: Set(i.id),
            name: Set(i.name),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
