//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("Topic not found: {0}")]
    TopicNotFound(Uuid),

    #[error("Comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(Uuid),

    // =========================================================================
    // Authorization Errors (the policy denial taxonomy)
    // =========================================================================
    #[error("Sign in required")]
    NotAuthenticated,

    #[error("Account is not approved for forum access")]
    NotApproved,

    #[error("Admin role required")]
    NotAdmin,

    #[error("Announcement categories accept admin posts only")]
    AnnouncementRestricted,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported evidence file type: {0}")]
    UnsupportedFileType(String),

    #[error("Evidence file too large: {size} bytes (max {max})")]
    FileTooLarge { size: i64, max: i64 },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Category name already in use")]
    CategoryNameExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Admins cannot demote themselves")]
    CannotDemoteSelf,

    #[error("Cannot reject an admin account (demote first)")]
    CannotRejectAdmin,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses. Denial codes follow the
    /// policy reason taxonomy so callers can branch on them.
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_)
            | Self::CategoryNotFound(_)
            | Self::TopicNotFound(_)
            | Self::CommentNotFound(_)
            | Self::SubmissionNotFound(_) => "RESOURCE_NOT_FOUND",

            // Authorization
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::NotApproved => "NOT_APPROVED",
            Self::NotAdmin => "NOT_ADMIN",
            Self::AnnouncementRestricted => "WRONG_CATEGORY_RESTRICTION",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CategoryNameExists => "CATEGORY_NAME_EXISTS",

            // Business Rules
            Self::CannotDemoteSelf => "CANNOT_DEMOTE_SELF",
            Self::CannotRejectAdmin => "CANNOT_REJECT_ADMIN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TopicNotFound(_)
                | Self::CommentNotFound(_)
                | Self::SubmissionNotFound(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated
                | Self::NotApproved
                | Self::NotAdmin
                | Self::AnnouncementRestricted
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnsupportedFileType(_) | Self::FileTooLarge { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::CategoryNameExists
                | Self::CannotDemoteSelf
                | Self::CannotRejectAdmin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_codes_follow_taxonomy() {
        assert_eq!(DomainError::NotAuthenticated.code(), "NOT_AUTHENTICATED");
        assert_eq!(DomainError::NotApproved.code(), "NOT_APPROVED");
        assert_eq!(DomainError::NotAdmin.code(), "NOT_ADMIN");
        assert_eq!(
            DomainError::AnnouncementRestricted.code(),
            "WRONG_CATEGORY_RESTRICTION"
        );
        assert_eq!(
            DomainError::TopicNotFound(Uuid::nil()).code(),
            "RESOURCE_NOT_FOUND"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::AccountNotFound(Uuid::nil()).is_not_found());
        assert!(DomainError::CommentNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::NotAdmin.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotApproved.is_authorization());
        assert!(DomainError::AnnouncementRestricted.is_authorization());
        assert!(!DomainError::EmailAlreadyExists.is_authorization());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::Validation("empty title".to_string()).is_validation());
        assert!(DomainError::FileTooLarge { size: 1, max: 0 }.is_validation());
        assert!(!DomainError::NotApproved.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::FileTooLarge {
            size: 100,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "Evidence file too large: 100 bytes (max 50)"
        );
    }
}
