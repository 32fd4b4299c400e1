//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tenantvoice_core::entities::Category;
use tenantvoice_core::error::DomainError;
use tenantvoice_core::traits::{CategoryRepository, RepoResult};

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, is_announcement, created_at
            FROM forum_categories
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name, description, is_announcement, created_at
            FROM forum_categories
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO forum_categories (id, name, description, is_announcement, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_announcement)
        .bind(category.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CategoryNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE forum_categories
            SET name = $2, description = $3, is_announcement = $4
            WHERE id = $1
            ",
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.is_announcement)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CategoryNameExists))?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
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
        assert_send_sync::<PgCategoryRepository>();
    }
}
