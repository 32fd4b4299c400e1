//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tenantvoice_core::entities::{Account, AccountRole, AccountStatus};
use tenantvoice_core::error::DomainError;
use tenantvoice_core::traits::{AccountRepository, RepoResult};

use crate::models::AccountModel;

use super::error::{account_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, email, password_hash, display_name,
                   status::TEXT as status, role::TEXT as role,
                   created_at, updated_at
            FROM accounts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, email, password_hash, display_name,
                   status::TEXT as status, role::TEXT as role,
                   created_at, updated_at
            FROM accounts
            WHERE lower(email) = lower($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"SELECT EXISTS(SELECT 1 FROM accounts WHERE lower(email) = lower($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, account: &Account, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO accounts (id, email, password_hash, display_name, status, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5::account_status, $6::account_role, $7, $8)
            ",
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(password_hash)
        .bind(&account.display_name)
        .bind(account.status.as_str())
        .bind(account.role.as_str())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            r"SELECT password_hash FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn list_pending(&self) -> RepoResult<Vec<Account>> {
        let results = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, email, password_hash, display_name,
                   status::TEXT as status, role::TEXT as role,
                   created_at, updated_at
            FROM accounts
            WHERE status = 'pending'
            ORDER BY created_at ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Account::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: AccountStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE accounts
            SET status = $2::account_status, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(
        &self,
        id: Uuid,
        role: AccountRole,
        status: AccountStatus,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE accounts
            SET role = $2::account_role, status = $3::account_status, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(role.as_str())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_display_name(&self, id: Uuid, display_name: Option<&str>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE accounts
            SET display_name = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(display_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAccountRepository>();
    }
}
