//! Fixtures shared by service and HTTP tests

use std::path::PathBuf;
use std::sync::Arc;

use sea_orm_migration::MigratorTrait;

use super::migrator::Migrator;
use super::repositories::SeaOrmRepositoryProvider;
use super::{init_database, DatabaseConfig};
use crate::domain::{Gender, Interest, RepositoryProvider, UserProfile};

/// Fresh migrated in-memory database
pub async fn repositories() -> Arc<dyn RepositoryProvider> {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(SeaOrmRepositoryProvider::new(db))
}

/// Migrated SQLite file behind a multi-connection pool, for tests that need
/// transactions to really overlap. The file is removed on drop.
pub struct FileStore {
    path: PathBuf,
    repos: Arc<dyn RepositoryProvider>,
}

impl FileStore {
    pub async fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "campus-match-{}-{}.db",
            tag,
            uuid::Uuid::new_v4()
        ));
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 10,
        };
        let db = init_database(&config).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Self {
            path,
            repos: Arc::new(SeaOrmRepositoryProvider::new(db)),
        }
    }

    pub fn repositories(&self) -> Arc<dyn RepositoryProvider> {
        self.repos.clone()
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

pub async fn save_profile(repos: &dyn RepositoryProvider, profile: UserProfile) -> UserProfile {
    repos.users().save(profile.clone()).await.unwrap();
    profile
}

/// Active 21-year-old with default preferences and no interests
pub async fn save_user(repos: &dyn RepositoryProvider, name: &str, gender: Gender) -> UserProfile {
    save_profile(repos, UserProfile::new(name, 21, gender)).await
}

/// Catalogue entries by name, created when missing
pub async fn catalogue<const N: usize>(
    repos: &dyn RepositoryProvider,
    names: [&str; N],
) -> [Interest; N] {
    let mut found = Vec::with_capacity(N);
    for name in names {
        let interest = match repos.interests().find_by_name(name).await.unwrap() {
            Some(existing) => existing,
            None => {
                let created = Interest::new(name);
                repos.interests().save(created.clone()).await.unwrap();
                created
            }
        };
        found.push(interest);
    }
    found.try_into().unwrap()
}
