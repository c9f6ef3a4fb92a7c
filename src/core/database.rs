use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::core::config::DatabaseConfig;

/// Open the submission store, creating the SQLite file if it does not exist.
///
/// The returned pool is the only handle to the store. Callers own its
/// lifecycle: run [`migrate`] once before serving and `close()` it on shutdown.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await
}

/// Create both submission tables if they are missing.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    migrate(&pool).await.expect("migrations");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let pool = test_pool().await;
        migrate(&pool).await.expect("second run must be a no-op");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE '%_submissions' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, vec!["contact_submissions", "get_involved_submissions"]);
    }

    #[tokio::test]
    async fn test_create_pool_creates_missing_file() {
        let path = std::env::temp_dir().join(format!("wcaunion-{}.db", uuid::Uuid::new_v4()));
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
            acquire_timeout_secs: 5,
            busy_timeout_secs: 5,
        };

        let pool = create_pool(&config).await.unwrap();
        migrate(&pool).await.unwrap();
        pool.close().await;

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
