//! Incident submission service
//!
//! Intake is open to everyone, anonymous reporters included. Evidence is
//! gated server-side by MIME allowlist and size cap before any row is
//! written; review operations are admin-only.

use tenantvoice_core::entities::{
    is_accepted_file_type, IssueType, Submission, SubmissionFile, SubmissionStatus,
    MAX_FILE_SIZE_BYTES,
};
use tenantvoice_core::policy::{self, Action, Actor};
use tenantvoice_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CreateSubmissionRequest, SubmissionCreatedResponse, SubmissionDetailResponse,
    SubmissionFileResponse, SubmissionResponse, UpdateSubmissionStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Submission service
pub struct SubmissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubmissionService<'a> {
    /// Create a new SubmissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File an incident report. Returns the reference id the reporter keeps.
    #[instrument(skip(self, request), fields(issue_type = %request.issue_type))]
    pub async fn create(
        &self,
        request: CreateSubmissionRequest,
    ) -> ServiceResult<SubmissionCreatedResponse> {
        policy::decide(Actor::Anonymous, &Action::SubmitIncident).require()?;

        if !request.truthfulness_affirmation {
            return Err(ServiceError::validation(
                "You must affirm that the information is accurate",
            ));
        }

        let issue_type = parse_issue_type(&request.issue_type)?;

        // Gate every file before writing anything; no partial writes on a
        // bad attachment.
        for file in &request.files {
            if !is_accepted_file_type(&file.file_type) {
                return Err(DomainError::UnsupportedFileType(file.file_type.clone()).into());
            }
            if file.file_size > MAX_FILE_SIZE_BYTES {
                return Err(DomainError::FileTooLarge {
                    size: file.file_size,
                    max: MAX_FILE_SIZE_BYTES,
                }
                .into());
            }
        }

        let submission = Submission::new(
            Uuid::new_v4(),
            none_if_blank(request.full_name),
            request.property_name,
            request.unit_number,
            none_if_blank(request.contact_info),
            issue_type,
            request.incident_dates,
            request.description,
            none_if_blank(request.location_notes),
            request.allow_followup,
        );

        self.ctx.submission_repo().create(&submission).await?;

        for file in &request.files {
            let record = SubmissionFile::new(
                Uuid::new_v4(),
                submission.id,
                file.file_name.clone(),
                file.file_size,
                file.file_type.clone(),
            );
            self.ctx.submission_repo().attach_file(&record).await?;
        }

        info!(
            submission_id = %submission.id,
            reference_id = %submission.reference_id,
            files = request.files.len(),
            "Submission received"
        );

        Ok(SubmissionCreatedResponse {
            id: submission.id,
            reference_id: submission.reference_id,
        })
    }

    /// List all submissions for the admin console, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, actor_id: Uuid) -> ServiceResult<Vec<SubmissionResponse>> {
        self.require_reviewer(actor_id).await?;

        let submissions = self.ctx.submission_repo().list().await?;
        Ok(submissions.iter().map(SubmissionResponse::from).collect())
    }

    /// Get one submission with its evidence files (admin only)
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        actor_id: Uuid,
        submission_id: Uuid,
    ) -> ServiceResult<SubmissionDetailResponse> {
        self.require_reviewer(actor_id).await?;

        let submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", submission_id.to_string()))?;

        let files = self.ctx.submission_repo().list_files(submission.id).await?;

        Ok(SubmissionDetailResponse {
            submission: SubmissionResponse::from(&submission),
            files: files.iter().map(SubmissionFileResponse::from).collect(),
        })
    }

    /// Update a submission's review status (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        actor_id: Uuid,
        submission_id: Uuid,
        request: UpdateSubmissionStatusRequest,
    ) -> ServiceResult<SubmissionResponse> {
        self.require_reviewer(actor_id).await?;

        let status = parse_status(&request.status)?;

        let mut submission = self
            .ctx
            .submission_repo()
            .find_by_id(submission_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Submission", submission_id.to_string()))?;

        submission.set_status(status);
        self.ctx
            .submission_repo()
            .update_status(submission.id, status)
            .await?;

        info!(submission_id = %submission.id, status = %status.as_str(), "Submission status updated");

        Ok(SubmissionResponse::from(&submission))
    }

    async fn require_reviewer(&self, actor_id: Uuid) -> ServiceResult<()> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;
        policy::decide(Actor::from_account(actor.as_ref()), &Action::ReviewSubmissions)
            .require()?;
        Ok(())
    }
}

/// Parse an issue type label strictly; unknown labels are validation errors,
/// not silently "Other".
fn parse_issue_type(label: &str) -> ServiceResult<IssueType> {
    let issue_type = IssueType::from(label);
    if issue_type.as_str() != label {
        return Err(ServiceError::validation(format!(
            "Unknown issue type: {label}"
        )));
    }
    Ok(issue_type)
}

/// Parse a review status label strictly.
fn parse_status(label: &str) -> ServiceResult<SubmissionStatus> {
    let status = SubmissionStatus::from(label);
    if status.as_str() != label {
        return Err(ServiceError::validation(format!(
            "Unknown submission status: {label}"
        )));
    }
    Ok(status)
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
