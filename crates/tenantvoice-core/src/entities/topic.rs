//! Topic entity - a forum thread inside a category

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Topic entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
    pub created_by: Uuid,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn new(id: Uuid, title: String, body: String, category_id: Uuid, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            body,
            category_id,
            created_by,
            is_hidden: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Soft-remove the topic from member listings.
    pub fn hide(&mut self) {
        self.is_hidden = true;
        self.updated_at = Utc::now();
    }

    /// Admin-gated inverse of `hide`.
    pub fn unhide(&mut self) {
        self.is_hidden = false;
        self.updated_at = Utc::now();
    }
}

/// A topic row composed with the context a listing needs: category label,
/// author display name, and comment count.
#[derive(Debug, Clone)]
pub struct TopicListing {
    pub topic: Topic,
    pub category_name: String,
    pub is_announcement: bool,
    pub author_name: Option<String>,
    pub comment_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_and_unhide() {
        let mut topic = Topic::new(
            Uuid::new_v4(),
            "Elevator outages in Building C".to_string(),
            "The elevator has been out for two weeks.".to_string(),
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        assert!(!topic.is_hidden);
        topic.hide();
        assert!(topic.is_hidden);
        topic.unhide();
        assert!(!topic.is_hidden);
    }
}
