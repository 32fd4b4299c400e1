//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("tenant{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            display_name: Some(format!("Tenant {suffix}")),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub account: AccountResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// Account response
#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub status: String,
    pub role: String,
    pub created_at: String,
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_announcement: bool,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Category {suffix}"),
            description: Some("A test discussion area".to_string()),
            is_announcement: false,
        }
    }

    pub fn announcement() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Announcements {suffix}"),
            description: None,
            is_announcement: true,
        }
    }
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_announcement: bool,
}

/// Create topic request
#[derive(Debug, Serialize)]
pub struct CreateTopicRequest {
    pub category_id: String,
    pub title: String,
    pub body: String,
}

impl CreateTopicRequest {
    pub fn in_category(category_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            category_id: category_id.to_string(),
            title: format!("Elevator outage report {suffix}"),
            body: "The elevator in Building C has been out for two weeks.".to_string(),
        }
    }
}

/// Topic response
#[derive(Debug, Deserialize)]
pub struct TopicResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category_id: String,
    pub category_name: String,
    pub is_announcement: bool,
    pub author_name: Option<String>,
    pub comment_count: i64,
    pub is_hidden: bool,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

impl CreateCommentRequest {
    pub fn simple(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub topic_id: String,
    pub body: String,
    pub author_name: Option<String>,
    pub is_hidden: bool,
}

/// Evidence metadata for a submission
#[derive(Debug, Serialize)]
pub struct SubmissionFileRequest {
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
}

/// Incident submission request
#[derive(Debug, Serialize)]
pub struct CreateSubmissionRequest {
    pub full_name: Option<String>,
    pub property_name: String,
    pub unit_number: String,
    pub contact_info: Option<String>,
    pub issue_type: String,
    pub incident_dates: String,
    pub description: String,
    pub location_notes: Option<String>,
    pub truthfulness_affirmation: bool,
    pub allow_followup: bool,
    pub files: Vec<SubmissionFileRequest>,
}

impl CreateSubmissionRequest {
    pub fn anonymous() -> Self {
        Self {
            full_name: None,
            property_name: "Riverside Apartments".to_string(),
            unit_number: "4B".to_string(),
            contact_info: None,
            issue_type: "Maintenance Neglect".to_string(),
            incident_dates: "July 2026".to_string(),
            description: "No hot water for three weeks despite repeated requests.".to_string(),
            location_notes: None,
            truthfulness_affirmation: true,
            allow_followup: false,
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file_name: &str, file_size: i64, file_type: &str) -> Self {
        self.files.push(SubmissionFileRequest {
            file_name: file_name.to_string(),
            file_size,
            file_type: file_type.to_string(),
        });
        self
    }
}

/// Submission created response
#[derive(Debug, Deserialize)]
pub struct SubmissionCreatedResponse {
    pub id: String,
    pub reference_id: String,
}

/// Submission response (admin listing)
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub id: String,
    pub reference_id: String,
    pub issue_type: String,
    pub status: String,
}

/// Update submission status request
#[derive(Debug, Serialize)]
pub struct UpdateSubmissionStatusRequest {
    pub status: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
