//! Entity -> response DTO mappers

use tenantvoice_core::entities::{
    Account, Category, CommentListing, Submission, SubmissionFile, TopicListing,
};

use super::responses::{
    AccountResponse, CategoryResponse, CommentResponse, SubmissionFileResponse,
    SubmissionResponse, TopicResponse,
};

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            display_name: account.display_name.clone(),
            status: account.status.as_str().to_string(),
            role: account.role.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            is_announcement: category.is_announcement,
            created_at: category.created_at,
        }
    }
}

impl From<TopicListing> for TopicResponse {
    fn from(listing: TopicListing) -> Self {
        Self {
            id: listing.topic.id,
            title: listing.topic.title,
            body: listing.topic.body,
            category_id: listing.topic.category_id,
            category_name: listing.category_name,
            is_announcement: listing.is_announcement,
            author_name: listing.author_name,
            comment_count: listing.comment_count,
            is_hidden: listing.topic.is_hidden,
            created_at: listing.topic.created_at,
            updated_at: listing.topic.updated_at,
        }
    }
}

impl From<CommentListing> for CommentResponse {
    fn from(listing: CommentListing) -> Self {
        Self {
            id: listing.comment.id,
            topic_id: listing.comment.topic_id,
            body: listing.comment.body,
            author_name: listing.author_name,
            is_hidden: listing.comment.is_hidden,
            created_at: listing.comment.created_at,
        }
    }
}

impl From<&Submission> for SubmissionResponse {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id,
            reference_id: submission.reference_id.clone(),
            full_name: submission.full_name.clone(),
            property_name: submission.property_name.clone(),
            unit_number: submission.unit_number.clone(),
            contact_info: submission.contact_info.clone(),
            issue_type: submission.issue_type.as_str().to_string(),
            incident_dates: submission.incident_dates.clone(),
            description: submission.description.clone(),
            location_notes: submission.location_notes.clone(),
            allow_followup: submission.allow_followup,
            status: submission.status.as_str().to_string(),
            created_at: submission.created_at,
        }
    }
}

impl From<&SubmissionFile> for SubmissionFileResponse {
    fn from(file: &SubmissionFile) -> Self {
        Self {
            id: file.id,
            file_name: file.file_name.clone(),
            file_path: file.file_path.clone(),
            file_size: file.file_size,
            file_type: file.file_type.clone(),
            created_at: file.created_at,
        }
    }
}
