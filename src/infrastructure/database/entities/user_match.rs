//! Match entity
//!
//! `user_a_id < user_b_id` always holds; the pair carries a unique index.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_a_id: String,
    pub user_b_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserAId",
        to = "super::user::Column::Id"
    )]
    UserA,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserBId",
        to = "super::user::Column::Id"
    )]
    UserB,
}

impl ActiveModelBehavior for ActiveModel {}
