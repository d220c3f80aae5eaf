// ABOUTME: Database connection management and migrations
// ABOUTME: Builds the SQLite pool (file-backed or in-memory) and applies the schema migrations

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::laundry::LaundryStorage;
use crate::{StorageError, StorageResult};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the laundry database. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database at `url` and make sure the schema exists.
    ///
    /// In-memory URLs (`sqlite::memory:`, `sqlite://`, `sqlite:///:memory:`)
    /// are routed to [`Database::in_memory`].
    pub async fn connect(url: &str) -> StorageResult<Self> {
        if is_in_memory_url(url) {
            return Self::in_memory().await;
        }

        if !url.starts_with("sqlite:") {
            return Err(StorageError::Database(format!(
                "Unsupported database URL: {}",
                url
            )));
        }

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        // Ensure parent directory exists
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!("Connecting to database: {}", url);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        info!("Database connection established");

        Self::from_pool(pool).await
    }

    /// Open a private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that never idles out.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        debug!("In-memory database opened");

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, applying any pending migrations
    pub async fn from_pool(pool: SqlitePool) -> StorageResult<Self> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn laundry_storage(&self) -> LaundryStorage {
        LaundryStorage::new(self.pool.clone())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Apply pending migrations. Already-applied ones are skipped, so this is
/// safe to run against a populated database.
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    debug!("Database migrations completed");
    Ok(())
}

pub fn is_in_memory_url(url: &str) -> bool {
    matches!(url, "sqlite::memory:" | "sqlite://" | "sqlite:///:memory:" | "sqlite://:memory:")
}
