//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tenantvoice_core::entities::{Comment, CommentListing};
use tenantvoice_core::policy::Visibility;
use tenantvoice_core::traits::{CommentRepository, RepoResult};

use crate::models::{CommentListingModel, CommentModel};

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, body, topic_id, created_by, is_hidden, created_at
            FROM forum_comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_topic(
        &self,
        topic_id: Uuid,
        visibility: Visibility,
    ) -> RepoResult<Vec<CommentListing>> {
        let include_hidden = visibility == Visibility::IncludeHidden;

        let results = sqlx::query_as::<_, CommentListingModel>(
            r"
            SELECT fc.id, fc.body, fc.topic_id, fc.created_by, fc.is_hidden, fc.created_at,
                   a.display_name as author_name
            FROM forum_comments fc
            JOIN accounts a ON a.id = fc.created_by
            WHERE fc.topic_id = $1
              AND ($2 OR NOT fc.is_hidden)
            ORDER BY fc.created_at ASC
            ",
        )
        .bind(topic_id)
        .bind(include_hidden)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentListing::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO forum_comments (id, body, topic_id, created_by, is_hidden, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id)
        .bind(&comment.body)
        .bind(comment.topic_id)
        .bind(comment.created_by)
        .bind(comment.is_hidden)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_hidden(&self, id: Uuid, hidden: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE forum_comments
            SET is_hidden = $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(hidden)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM forum_comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
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
        assert_send_sync::<PgCommentRepository>();
    }
}
