//! PostgreSQL-backed account store.

use async_trait::async_trait;

use super::{AccountStore, StoreError};
use crate::{
    db::DbPool,
    models::account::{Account, AccountPayload, NewAccount},
};

/// Account store over the `accounts` table.
///
/// Ids come from the `BIGSERIAL` sequence, which never hands out a value twice.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn get(&self, id: i64) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, name, email, address, phone_number FROM accounts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, address, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, address, phone_number
            "#,
        )
        .bind(account.name)
        .bind(account.email)
        .bind(account.address)
        .bind(account.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn update(
        &self,
        id: i64,
        changes: &AccountPayload,
    ) -> Result<Option<Account>, StoreError> {
        // NULL parameters keep the stored column value
        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                address = COALESCE($4, address),
                phone_number = COALESCE($5, phone_number)
            WHERE id = $1
            RETURNING id, name, email, address, phone_number
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.address.as_deref())
        .bind(changes.phone_number.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        // rows_affected == 0 is fine: delete is idempotent
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
