//! Create swipes table
//!
//! The unique (swiper, swiped) index is what makes a second swipe on the
//! same ordered pair fail.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Swipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Swipes::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Swipes::SwiperUserId).string().not_null())
                    .col(ColumnDef::new(Swipes::SwipedUserId).string().not_null())
                    .col(ColumnDef::new(Swipes::Action).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Swipes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_swipes_swiper")
                            .from(Swipes::Table, Swipes::SwiperUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_swipes_swiped")
                            .from(Swipes::Table, Swipes::SwipedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_swipes_pair")
                    .table(Swipes::Table)
                    .col(Swipes::SwiperUserId)
                    .col(Swipes::SwipedUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_swipes_swiped")
                    .table(Swipes::Table)
                    .col(Swipes::SwipedUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Swipes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Swipes {
    Table,
    Id,
    SwiperUserId,
    SwipedUserId,
    Action,
    CreatedAt,
}
