use crate::models::fighter::{Fighter, FighterPatch, NewFighter};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        if !in_memory {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // Every SQLite in-memory connection is its own database, so keep exactly
        // one alive and never recycle it.
        let (max_connections, min_connections) = if in_memory {
            opt.idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
            (1, 1)
        } else {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
            (max_connections, min_connections)
        };
        opt.max_connections(max_connections)
            .min_connections(min_connections);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn fighter_repo(&self) -> repositories::fighter::FighterRepository {
        repositories::fighter::FighterRepository::new(self.conn.clone())
    }

    pub async fn add_fighter(&self, fighter: &NewFighter) -> Result<i32> {
        self.fighter_repo().insert(fighter).await
    }

    pub async fn add_fighters(&self, fighters: &[NewFighter]) -> Result<Vec<i32>> {
        self.fighter_repo().insert_many(fighters).await
    }

    pub async fn get_fighter(&self, id: i32) -> Result<Option<Fighter>> {
        self.fighter_repo().get(id).await
    }

    pub async fn list_fighters(&self) -> Result<Vec<Fighter>> {
        self.fighter_repo().list_all().await
    }

    pub async fn update_fighter(&self, id: i32, patch: &FighterPatch) -> Result<Option<Fighter>> {
        self.fighter_repo().update(id, patch).await
    }

    pub async fn remove_fighter(&self, id: i32) -> Result<bool> {
        self.fighter_repo().remove(id).await
    }

    pub async fn count_fighters(&self) -> Result<u64> {
        self.fighter_repo().count().await
    }
}
