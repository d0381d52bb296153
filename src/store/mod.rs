//! Account persistence.
//!
//! Handlers talk to the [`AccountStore`] trait only. Two implementations exist:
//!
//! - [`PgAccountStore`]: PostgreSQL through `sqlx`, used when `DATABASE_URL` is set
//! - [`MemoryAccountStore`]: in-process map, for tests and local runs

mod memory;
mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;

use async_trait::async_trait;

use crate::models::account::{Account, AccountPayload, NewAccount};

/// Failure inside a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Single-record CRUD over account rows.
///
/// Every method is one statement against the backend; concurrent requests on
/// the same id rely on the backend's own atomicity.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch one account. `Ok(None)` if the id is absent.
    async fn get(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// All accounts ordered by id.
    async fn list(&self) -> Result<Vec<Account>, StoreError>;

    /// Insert a row and return it with its freshly assigned id.
    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Overwrite the fields set in `changes`, keeping the others, in one step.
    ///
    /// Returns `Ok(None)` if the row does not exist.
    async fn update(
        &self,
        id: i64,
        changes: &AccountPayload,
    ) -> Result<Option<Account>, StoreError>;

    /// Remove a row. Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
