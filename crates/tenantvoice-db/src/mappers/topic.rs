//! Topic entity <-> model mappers

use tenantvoice_core::entities::{Topic, TopicListing};

use crate::models::{TopicListingModel, TopicModel};

impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: model.id,
            title: model.title,
            body: model.body,
            category_id: model.category_id,
            created_by: model.created_by,
            is_hidden: model.is_hidden,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TopicListingModel> for TopicListing {
    fn from(model: TopicListingModel) -> Self {
        TopicListing {
            topic: Topic {
                id: model.id,
                title: model.title,
                body: model.body,
                category_id: model.category_id,
                created_by: model.created_by,
                is_hidden: model.is_hidden,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            category_name: model.category_name,
            is_announcement: model.is_announcement,
            author_name: model.author_name,
            comment_count: model.comment_count,
        }
    }
}
