//! Create user_interests association table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000002_create_interests::Interests;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInterests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserInterests::UserId).string().not_null())
                    .col(
                        ColumnDef::new(UserInterests::InterestId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserInterests::UserId)
                            .col(UserInterests::InterestId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interests_user")
                            .from(UserInterests::Table, UserInterests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_interests_interest")
                            .from(UserInterests::Table, UserInterests::InterestId)
                            .to(Interests::Table, Interests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInterests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UserInterests {
    Table,
    UserId,
    InterestId,
}
