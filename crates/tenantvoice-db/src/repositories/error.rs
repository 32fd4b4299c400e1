//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tenantvoice_core::error::DomainError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "account not found" error
pub fn account_not_found(id: Uuid) -> DomainError {
    DomainError::AccountNotFound(id)
}

/// Create a "category not found" error
pub fn category_not_found(id: Uuid) -> DomainError {
    DomainError::CategoryNotFound(id)
}

/// Create a "topic not found" error
pub fn topic_not_found(id: Uuid) -> DomainError {
    DomainError::TopicNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Uuid) -> DomainError {
    DomainError::CommentNotFound(id)
}

/// Create a "submission not found" error
pub fn submission_not_found(id: Uuid) -> DomainError {
    DomainError::SubmissionNotFound(id)
}
