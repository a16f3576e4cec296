//! Seed the interest catalogue

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_interests::Interests;

pub const DEFAULT_INTERESTS: &[&str] = &[
    "Art",
    "Basketball",
    "Coding",
    "Cooking",
    "Dancing",
    "Entrepreneurship",
    "Film",
    "Football",
    "Gaming",
    "Hiking",
    "Music",
    "Photography",
    "Reading",
    "Travel",
    "Volunteering",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Interests::Table)
            .columns([Interests::Id, Interests::Name]);
        for name in DEFAULT_INTERESTS {
            insert
                .values([uuid::Uuid::new_v4().to_string().into(), (*name).into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }
        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Interests::Table)
                    .and_where(Expr::col(Interests::Name).is_in(DEFAULT_INTERESTS.iter().copied()))
                    .to_owned(),
            )
            .await
    }
}
