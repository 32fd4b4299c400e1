//! Incident submission entities
//!
//! Submissions are filed from the public report form, optionally anonymously.
//! Evidence is tracked as metadata rows; byte storage lives elsewhere.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted evidence file size (50 MB).
pub const MAX_FILE_SIZE_BYTES: i64 = 50 * 1024 * 1024;

/// MIME types accepted as evidence attachments.
pub const ACCEPTED_FILE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/quicktime",
    "video/webm",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "audio/mpeg",
    "audio/wav",
    "audio/mp4",
];

/// Check whether a MIME type is accepted as evidence.
#[must_use]
pub fn is_accepted_file_type(mime: &str) -> bool {
    ACCEPTED_FILE_TYPES.contains(&mime)
}

/// Build the human-readable reference id handed back to the reporter,
/// e.g. `JWC-20260807-1a2b3c4d`.
#[must_use]
pub fn reference_id(id: Uuid, date: NaiveDate) -> String {
    let simple = id.simple().to_string();
    format!("JWC-{}-{}", date.format("%Y%m%d"), &simple[..8])
}

/// Kind of issue being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    Harassment,
    #[serde(rename = "Unsafe Conditions")]
    UnsafeConditions,
    #[serde(rename = "Maintenance Neglect")]
    MaintenanceNeglect,
    Discrimination,
    #[serde(rename = "Privacy Violations")]
    PrivacyViolations,
    Retaliation,
    Other,
}

impl IssueType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Harassment => "Harassment",
            Self::UnsafeConditions => "Unsafe Conditions",
            Self::MaintenanceNeglect => "Maintenance Neglect",
            Self::Discrimination => "Discrimination",
            Self::PrivacyViolations => "Privacy Violations",
            Self::Retaliation => "Retaliation",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for IssueType {
    fn from(value: &str) -> Self {
        match value {
            "Harassment" => Self::Harassment,
            "Unsafe Conditions" => Self::UnsafeConditions,
            "Maintenance Neglect" => Self::MaintenanceNeglect,
            "Discrimination" => Self::Discrimination,
            "Privacy Violations" => Self::PrivacyViolations,
            "Retaliation" => Self::Retaliation,
            _ => Self::Other,
        }
    }
}

/// Review state of a submission in the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Reviewed,
    Resolved,
}

impl SubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
        }
    }
}

impl From<&str> for SubmissionStatus {
    fn from(value: &str) -> Self {
        match value {
            "reviewed" => Self::Reviewed,
            "resolved" => Self::Resolved,
            _ => Self::New,
        }
    }
}

/// Incident submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub reference_id: String,
    pub full_name: Option<String>,
    pub property_name: String,
    pub unit_number: String,
    pub contact_info: Option<String>,
    pub issue_type: IssueType,
    pub incident_dates: String,
    pub description: String,
    pub location_notes: Option<String>,
    pub allow_followup: bool,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        full_name: Option<String>,
        property_name: String,
        unit_number: String,
        contact_info: Option<String>,
        issue_type: IssueType,
        incident_dates: String,
        description: String,
        location_notes: Option<String>,
        allow_followup: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            reference_id: reference_id(id, now.date_naive()),
            full_name,
            property_name,
            unit_number,
            contact_info,
            issue_type,
            incident_dates,
            description,
            location_notes,
            allow_followup,
            status: SubmissionStatus::New,
            created_at: now,
        }
    }

    pub fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

/// Evidence metadata attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

impl SubmissionFile {
    pub fn new(
        id: Uuid,
        submission_id: Uuid,
        file_name: String,
        file_size: i64,
        file_type: String,
    ) -> Self {
        let created_at = Utc::now();
        // Storage keys are namespaced by submission so evidence stays scoped
        // to its report.
        let file_path = format!("{submission_id}/{}-{file_name}", created_at.timestamp_millis());
        Self {
            id,
            submission_id,
            file_name,
            file_path,
            file_size,
            file_type,
            created_at,
        }
    }
}
