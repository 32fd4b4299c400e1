//! Comment entity - a reply inside a topic

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Comment entity. Leaf of the content tree: deleting a comment cascades to
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub body: String,
    pub topic_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: Uuid, body: String, topic_id: Uuid, created_by: Uuid) -> Self {
        Self {
            id,
            body,
            topic_id,
            created_by,
            is_hidden: false,
            created_at: Utc::now(),
        }
    }

    pub fn hide(&mut self) {
        self.is_hidden = true;
    }

    pub fn unhide(&mut self) {
        self.is_hidden = false;
    }
}

/// Comment row composed with its author's display name.
#[derive(Debug, Clone)]
pub struct CommentListing {
    pub comment: Comment,
    pub author_name: Option<String>,
}
