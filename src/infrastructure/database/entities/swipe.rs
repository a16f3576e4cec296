//! Swipe entity
//!
//! One row per ordered (swiper, swiped) pair, enforced by a unique index.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum SwipeAction {
    #[sea_orm(string_value = "LIKE")]
    Like,
    #[sea_orm(string_value = "DISLIKE")]
    Dislike,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "swipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub swiper_user_id: String,
    pub swiped_user_id: String,
    pub action: SwipeAction,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SwiperUserId",
        to = "super::user::Column::Id"
    )]
    Swiper,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SwipedUserId",
        to = "super::user::Column::Id"
    )]
    Swiped,
}

impl ActiveModelBehavior for ActiveModel {}
