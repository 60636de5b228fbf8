//! Status-check persistence.
//!
//! Records are stored as whole JSON documents. The HTTP layer only sees the
//! `StatusStore` trait, so tests can swap in `MemoryStatusStore`.

mod postgres;

pub use postgres::{PgStatusStore, PgStoreConfig};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::StatusCheck;

/// Upper bound on documents returned by `GET /status`.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("database error: {0}")]
    Database(String),

    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        match err.as_db_error() {
            Some(db_error) => {
                StoreError::Database(format!("{}: {}", db_error.code().code(), db_error.message()))
            }
            None => StoreError::Database(err.to_string()),
        }
    }
}

impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}

#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> Result<(), StoreError>;

    /// At most `limit` records, in no guaranteed order.
    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError>;
}

/// In-process store used by tests and local runs without a database.
#[derive(Default)]
pub struct MemoryStatusStore {
    checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn insert(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError> {
        Ok(self.checks.read().await.iter().take(limit).cloned().collect())
    }
}
