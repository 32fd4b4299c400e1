//! Comment entity <-> model mappers

use tenantvoice_core::entities::{Comment, CommentListing};

use crate::models::{CommentListingModel, CommentModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            body: model.body,
            topic_id: model.topic_id,
            created_by: model.created_by,
            is_hidden: model.is_hidden,
            created_at: model.created_at,
        }
    }
}

impl From<CommentListingModel> for CommentListing {
    fn from(model: CommentListingModel) -> Self {
        CommentListing {
            comment: Comment {
                id: model.id,
                body: model.body,
                topic_id: model.topic_id,
                created_by: model.created_by,
                is_hidden: model.is_hidden,
                created_at: model.created_at,
            },
            author_name: model.author_name,
        }
    }
}
