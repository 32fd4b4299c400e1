//! Submission entity <-> model mappers

use tenantvoice_core::entities::{IssueType, Submission, SubmissionFile, SubmissionStatus};

use crate::models::{SubmissionFileModel, SubmissionModel};

impl From<SubmissionModel> for Submission {
    fn from(model: SubmissionModel) -> Self {
        Submission {
            id: model.id,
            reference_id: model.reference_id,
            full_name: model.full_name,
            property_name: model.property_name,
            unit_number: model.unit_number,
            contact_info: model.contact_info,
            issue_type: IssueType::from(model.issue_type.as_str()),
            incident_dates: model.incident_dates,
            description: model.description,
            location_notes: model.location_notes,
            allow_followup: model.allow_followup,
            status: SubmissionStatus::from(model.status.as_str()),
            created_at: model.created_at,
        }
    }
}

impl From<SubmissionFileModel> for SubmissionFile {
    fn from(model: SubmissionFileModel) -> Self {
        SubmissionFile {
            id: model.id,
            submission_id: model.submission_id,
            file_name: model.file_name,
            file_path: model.file_path,
            file_size: model.file_size,
            file_type: model.file_type,
            created_at: model.created_at,
        }
    }
}
