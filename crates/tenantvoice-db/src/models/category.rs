//! Category database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the forum_categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_announcement: bool,
    pub created_at: DateTime<Utc>,
}
