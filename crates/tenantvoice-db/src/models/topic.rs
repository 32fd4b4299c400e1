//! Topic database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the forum_topics table
#[derive(Debug, Clone, FromRow)]
pub struct TopicModel {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Topic row joined with its category label, author display name, and
/// comment count for listings.
#[derive(Debug, Clone, FromRow)]
pub struct TopicListingModel {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: String,
    pub is_announcement: bool,
    pub author_name: Option<String>,
    pub comment_count: i64,
}
