//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use repository::{RepoError, RepoResult};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

/// Embedded migrations, applied on connect
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open a file-backed database with WAL mode and run migrations
    pub async fn new(db_path: &str) -> RepoResult<Self> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        // busy_timeout: 写冲突时等待 5s 而非立即失败
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// In-memory database for tests
    ///
    /// Single connection: every `sqlite::memory:` connection is its own
    /// database.
    pub async fn in_memory() -> RepoResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open in-memory database: {e}")))?;

        sqlx::query("PRAGMA foreign_keys = ON;").execute(&pool).await?;

        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to apply migrations: {e}")))?;

        Ok(Self { pool })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_backed_database_applies_migrations() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pos.db");

        let db = DbService::new(db_path.to_str().unwrap()).await.unwrap();
        let product = repository::product::create(&db.pool, "Americano", 5600)
            .await
            .unwrap();
        assert_eq!(product.price, 5600);
    }

    #[tokio::test]
    async fn in_memory_database_starts_empty() {
        let db = DbService::in_memory().await.unwrap();
        let products = repository::product::find_all(&db.pool).await.unwrap();
        assert!(products.is_empty());
    }
}
