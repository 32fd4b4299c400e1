//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. UUIDs serialize
//! as strings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        account: AccountResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            account,
        }
    }
}

// ============================================================================
// Account Responses
// ============================================================================

/// Account response, including moderation status so the UI can branch on it
/// ("pending approval" vs "admin required" vs full access).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub status: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Category Responses
// ============================================================================

/// Category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_announcement: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Topic Responses
// ============================================================================

/// Topic response with listing context. `is_hidden` only ever reaches admin
/// viewers; hidden rows are filtered out for everyone else before this point.
#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub is_announcement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub comment_count: i64,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Submission Responses
// ============================================================================

/// Acknowledgement returned to the reporter
#[derive(Debug, Serialize)]
pub struct SubmissionCreatedResponse {
    pub id: Uuid,
    pub reference_id: String,
}

/// Submission summary for the admin console
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub reference_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub property_name: String,
    pub unit_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub issue_type: String,
    pub incident_dates: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_notes: Option<String>,
    pub allow_followup: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Evidence metadata row
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionFileResponse {
    pub id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

/// Submission with its evidence files
#[derive(Debug, Serialize)]
pub struct SubmissionDetailResponse {
    #[serde(flatten)]
    pub submission: SubmissionResponse,
    pub files: Vec<SubmissionFileResponse>,
}
