//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Validation runs before any policy check or store write.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 80, message = "Display name must be 1-80 characters"))]
    pub display_name: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Account Requests
// ============================================================================

/// Update own account request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    /// New display name, or null to fall back to the generic member label
    #[validate(length(min = 1, max = 80, message = "Display name must be 1-80 characters"))]
    pub display_name: Option<String>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub is_announcement: bool,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub is_announcement: Option<bool>,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create topic request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTopicRequest {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Message must be 1-10000 characters"))]
    pub body: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub body: String,
}

// ============================================================================
// Submission Requests
// ============================================================================

/// Evidence metadata accompanying a submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmissionFileRequest {
    #[validate(length(min = 1, max = 255, message = "File name must be 1-255 characters"))]
    pub file_name: String,

    #[validate(range(min = 1, message = "File size must be positive"))]
    pub file_size: i64,

    #[validate(length(min = 1, max = 100, message = "File type is required"))]
    pub file_type: String,
}

/// Incident submission request (open to anonymous reporters)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    #[validate(length(max = 200, message = "Name must be at most 200 characters"))]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Property name is required"))]
    pub property_name: String,

    #[validate(length(min = 1, max = 50, message = "Unit number is required"))]
    pub unit_number: String,

    #[validate(length(max = 200, message = "Contact info must be at most 200 characters"))]
    pub contact_info: Option<String>,

    /// One of the known issue type labels
    pub issue_type: String,

    #[validate(length(min = 1, max = 200, message = "Incident date(s) is required"))]
    pub incident_dates: String,

    #[validate(length(
        min = 10,
        max = 5000,
        message = "Please provide a detailed description (at least 10 characters)"
    ))]
    pub description: String,

    #[validate(length(max = 500, message = "Location notes must be at most 500 characters"))]
    pub location_notes: Option<String>,

    /// The reporter must affirm the report is accurate
    pub truthfulness_affirmation: bool,

    #[serde(default)]
    pub allow_followup: bool,

    #[serde(default)]
    #[validate(nested)]
    pub files: Vec<SubmissionFileRequest>,
}

/// Update submission review status request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubmissionStatusRequest {
    /// One of "new", "reviewed", "resolved"
    pub status: String,
}
