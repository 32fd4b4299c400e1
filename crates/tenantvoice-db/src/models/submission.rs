//! Submission database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the submissions table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: Uuid,
    pub reference_id: String,
    pub full_name: Option<String>,
    pub property_name: String,
    pub unit_number: String,
    pub contact_info: Option<String>,
    pub issue_type: String,
    pub incident_dates: String,
    pub description: String,
    pub location_notes: Option<String>,
    pub allow_followup: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for the submission_files table
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionFileModel {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}
