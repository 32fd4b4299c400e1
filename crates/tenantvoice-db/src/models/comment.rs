//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the forum_comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: Uuid,
    pub body: String,
    pub topic_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with its author's display name.
#[derive(Debug, Clone, FromRow)]
pub struct CommentListingModel {
    pub id: Uuid,
    pub body: String,
    pub topic_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub author_name: Option<String>,
}
