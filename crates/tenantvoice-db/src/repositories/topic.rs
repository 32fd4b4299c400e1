//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tenantvoice_core::entities::{Topic, TopicListing};
use tenantvoice_core::policy::Visibility;
use tenantvoice_core::traits::{RepoResult, TopicQuery, TopicRepository};

use crate::models::{TopicListingModel, TopicModel};

use super::error::{map_db_error, topic_not_found};

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r"
            SELECT id, title, body, category_id, created_by, is_hidden, created_at, updated_at
            FROM forum_topics
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: TopicQuery) -> RepoResult<Vec<TopicListing>> {
        // Hidden rows are excluded in SQL for non-admin viewers; UI-level
        // filtering alone is not a security boundary.
        let include_hidden = query.visibility == Visibility::IncludeHidden;

        let results = sqlx::query_as::<_, TopicListingModel>(
            r"
            SELECT t.id, t.title, t.body, t.category_id, t.created_by, t.is_hidden,
                   t.created_at, t.updated_at,
                   c.name as category_name, c.is_announcement,
                   a.display_name as author_name,
                   (SELECT COUNT(*) FROM forum_comments fc WHERE fc.topic_id = t.id) as comment_count
            FROM forum_topics t
            JOIN forum_categories c ON c.id = t.category_id
            JOIN accounts a ON a.id = t.created_by
            WHERE ($1 OR NOT t.is_hidden)
              AND ($2::uuid IS NULL OR t.category_id = $2)
            ORDER BY t.created_at DESC
            ",
        )
        .bind(include_hidden)
        .bind(query.category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(TopicListing::from).collect())
    }

    #[instrument(skip(self, topic))]
    async fn create(&self, topic: &Topic) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO forum_topics (id, title, body, category_id, created_by, is_hidden, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(topic.id)
        .bind(&topic.title)
        .bind(&topic.body)
        .bind(topic.category_id)
        .bind(topic.created_by)
        .bind(topic.is_hidden)
        .bind(topic.created_at)
        .bind(topic.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_hidden(&self, id: Uuid, hidden: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE forum_topics
            SET is_hidden = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(hidden)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Comments go with the topic through the FK cascade, so the pair of
        // deletes is a single atomic statement.
        let result = sqlx::query(r"DELETE FROM forum_topics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(topic_not_found(id));
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
        assert_send_sync::<PgTopicRepository>();
    }
}
