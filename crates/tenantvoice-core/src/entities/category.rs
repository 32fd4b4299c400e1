//! Category entity - a discussion area of the forum

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Forum category. `is_announcement` restricts topic creation to admins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_announcement: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: Uuid, name: String, description: Option<String>, is_announcement: bool) -> Self {
        Self {
            id,
            name,
            description,
            is_announcement,
            created_at: Utc::now(),
        }
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_announcement(&mut self, is_announcement: bool) {
        self.is_announcement = is_announcement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(
            Uuid::new_v4(),
            "Building Updates".to_string(),
            Some("News from each building".to_string()),
            false,
        );
        assert!(!category.is_announcement);
        assert_eq!(category.name, "Building Updates");
    }
}
