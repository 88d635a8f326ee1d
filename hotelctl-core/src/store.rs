//! SQLite store handle.
//!
//! `HotelStore` owns a small sqlx pool. Operations never hold a connection
//! between calls: each one acquires a connection, runs its statements and
//! drops it, which returns it to the pool on every exit path.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use crate::error::Result;
use crate::{schema, seed};

/// One interactive session issues one operation at a time.
const MAX_CONNECTIONS: u32 = 1;

/// Handle to the reservation database.
#[derive(Debug, Clone)]
pub struct HotelStore {
    pool: SqlitePool,
}

impl HotelStore {
    /// Open (creating if needed) the database file and ensure the schema.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        info!("opening hotel database: {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            // References are declared in the schema but not enforced.
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .foreign_keys(false);

        // The database lives as long as its only connection does.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Open an in-memory database pre-loaded with the seed data.
    pub async fn open_seeded_in_memory() -> Result<Self> {
        let store = Self::open_in_memory().await?;
        store.seed().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        schema::create_schema(&mut conn).await
    }

    /// Load the literal seed rows; returns how many were new.
    pub async fn seed(&self) -> Result<u64> {
        let mut conn = self.acquire().await?;
        seed::seed(&mut conn).await
    }

    pub(crate) async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        debug!("acquiring store connection");
        Ok(self.pool.acquire().await?)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Row counts for every table.
    pub async fn stats(&self) -> Result<StoreStats> {
        let mut conn = self.acquire().await?;
        let mut counts = Vec::new();

        for table in schema::table_names() {
            // Table names come from the static schema list, never from input.
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&mut *conn)
                .await?;
            counts.push((table, count as u64));
        }

        Ok(StoreStats { counts })
    }
}

/// Row counts per table.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub counts: Vec<(&'static str, u64)>,
}

impl StoreStats {
    pub fn count(&self, table: &str) -> u64 {
        self.counts
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_in_memory_is_empty() {
        let store = HotelStore::open_in_memory().await.unwrap();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.counts.len(), 7);
        assert!(stats.counts.iter().all(|(_, count)| *count == 0));
    }

    #[tokio::test]
    async fn test_seed_counts() {
        let store = HotelStore::open_seeded_in_memory().await.unwrap();
        let stats = store.stats().await.unwrap();

        assert_eq!(stats.count("Hotel"), 2);
        assert_eq!(stats.count("Client"), 5);
        assert_eq!(stats.count("Prestation"), 5);
        assert_eq!(stats.count("TypeChambre"), 2);
        assert_eq!(stats.count("Chambre"), 8);
        assert_eq!(stats.count("Reservation"), 8);
        assert_eq!(stats.count("Evaluation"), 5);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = HotelStore::open_seeded_in_memory().await.unwrap();
        assert_eq!(store.seed().await.unwrap(), 0);
        assert_eq!(store.stats().await.unwrap().count("Reservation"), 8);
    }

    #[tokio::test]
    async fn test_reopen_file_keeps_rows() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("hotel.db");

        let store = HotelStore::open(&db_path).await.unwrap();
        assert_eq!(store.seed().await.unwrap(), 35);
        store.close().await;

        let store = HotelStore::open(&db_path).await.unwrap();
        assert_eq!(store.stats().await.unwrap().count("Chambre"), 8);
    }
}
