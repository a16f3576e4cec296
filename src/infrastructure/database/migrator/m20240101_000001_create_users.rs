//! Create users table
//!
//! Discovery-relevant profile data plus stored discovery preferences.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Users::Fullname).string().not_null())
                    .col(ColumnDef::new(Users::Age).integer().not_null())
                    .col(ColumnDef::new(Users::Gender).string_len(10).not_null())
                    .col(ColumnDef::new(Users::Faculty).string())
                    .col(ColumnDef::new(Users::Program).string())
                    .col(ColumnDef::new(Users::Bio).text())
                    .col(ColumnDef::new(Users::ProfilePicture).string())
                    .col(
                        ColumnDef::new(Users::Photos)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::InterestedInGender)
                            .string_len(10)
                            .not_null()
                            .default("ALL"),
                    )
                    .col(ColumnDef::new(Users::MinAgePreference).integer())
                    .col(ColumnDef::new(Users::MaxAgePreference).integer())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_discovery")
                    .table(Users::Table)
                    .col(Users::IsActive)
                    .col(Users::Gender)
                    .col(Users::Age)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Fullname,
    Age,
    Gender,
    Faculty,
    Program,
    Bio,
    ProfilePicture,
    Photos,
    IsActive,
    InterestedInGender,
    MinAgePreference,
    MaxAgePreference,
    CreatedAt,
    UpdatedAt,
}
