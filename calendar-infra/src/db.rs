//! Postgres 连接池与迁移
//!
use crate::config::DbConfig;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use tracing::info;

/// 编译期嵌入的 `calendar-infra/migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "connecting to database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .max_lifetime(Some(config.max_lifetime))
            .connect(&config.database_url)
            .await
            .map_err(DbError::Connect)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 应用尚未执行的嵌入迁移
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        info!(migrations = MIGRATOR.iter().count(), "running database migrations");

        MIGRATOR.run(&self.pool).await.map_err(DbError::Migration)?;

        info!("database migrations complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_embedded() {
        let migration = MIGRATOR
            .iter()
            .find(|m| m.version == 1)
            .expect("events migration is embedded");

        assert_eq!(migration.description, "create events");
        assert!(migration.sql.contains("CREATE TABLE IF NOT EXISTS events"));
        assert!(migration.sql.contains("(user_id, start_time, end_time)"));
    }
}
