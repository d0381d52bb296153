//! In-memory account store.
//!
//! Rows live in a `BTreeMap` behind a `RwLock`, so listing comes back in id
//! order. Nothing is persisted; all data is lost when the process exits.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountStore, StoreError};
use crate::models::account::{Account, AccountPayload, NewAccount};

#[derive(Debug, Default)]
struct Rows {
    /// Last id handed out. Never decremented, so ids are not reused.
    last_id: i64,
    accounts: BTreeMap<i64, Account>,
}

/// Account store kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    rows: Arc<RwLock<Rows>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn get(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.accounts.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.accounts.values().cloned().collect())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let account = account.with_id(rows.last_id);
        rows.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(
        &self,
        id: i64,
        changes: &AccountPayload,
    ) -> Result<Option<Account>, StoreError> {
        let mut rows = self.rows.write().await;
        Ok(rows.accounts.get_mut(&id).map(|stored| {
            stored.apply(changes);
            stored.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        rows.accounts.remove(&id);
        Ok(())
    }
}
