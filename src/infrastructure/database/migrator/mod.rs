//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_interests;
mod m20240101_000003_create_user_interests;
mod m20240101_000004_create_swipes;
mod m20240101_000005_create_matches;
mod m20240101_000006_seed_interests;

pub use m20240101_000006_seed_interests::DEFAULT_INTERESTS;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_interests::Migration),
            Box::new(m20240101_000003_create_user_interests::Migration),
            Box::new(m20240101_000004_create_swipes::Migration),
            Box::new(m20240101_000005_create_matches::Migration),
            Box::new(m20240101_000006_seed_interests::Migration),
        ]
    }
}
