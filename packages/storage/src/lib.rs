// ABOUTME: Data layer and persistence for laundry items
// ABOUTME: SQLite connection setup, migrations and the item store

use thiserror::Error;

pub mod db;
pub mod laundry;

pub use db::Database;
pub use laundry::LaundryStorage;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Item not found")]
    NotFound,
    #[error("tag_id already in use: {0}")]
    TagInUse(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
