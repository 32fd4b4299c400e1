//! PostgreSQL implementation of SubmissionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tenantvoice_core::entities::{Submission, SubmissionFile, SubmissionStatus};
use tenantvoice_core::traits::{RepoResult, SubmissionRepository};

use crate::models::{SubmissionFileModel, SubmissionModel};

use super::error::{map_db_error, submission_not_found};

/// PostgreSQL implementation of SubmissionRepository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    /// Create a new PgSubmissionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Submission>> {
        let result = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, reference_id, full_name, property_name, unit_number, contact_info,
                   issue_type::TEXT as issue_type, incident_dates, description, location_notes,
                   allow_followup, status::TEXT as status, created_at
            FROM submissions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Submission::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Submission>> {
        let results = sqlx::query_as::<_, SubmissionModel>(
            r"
            SELECT id, reference_id, full_name, property_name, unit_number, contact_info,
                   issue_type::TEXT as issue_type, incident_dates, description, location_notes,
                   allow_followup, status::TEXT as status, created_at
            FROM submissions
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Submission::from).collect())
    }

    #[instrument(skip(self, submission))]
    async fn create(&self, submission: &Submission) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO submissions (id, reference_id, full_name, property_name, unit_number,
                                     contact_info, issue_type, incident_dates, description,
                                     location_notes, allow_followup, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7::issue_type, $8, $9, $10, $11, $12::submission_status, $13)
            ",
        )
        .bind(submission.id)
        .bind(&submission.reference_id)
        .bind(&submission.full_name)
        .bind(&submission.property_name)
        .bind(&submission.unit_number)
        .bind(&submission.contact_info)
        .bind(submission.issue_type.as_str())
        .bind(&submission.incident_dates)
        .bind(&submission.description)
        .bind(&submission.location_notes)
        .bind(submission.allow_followup)
        .bind(submission.status.as_str())
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, file))]
    async fn attach_file(&self, file: &SubmissionFile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO submission_files (id, submission_id, file_name, file_path, file_size, file_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(file.id)
        .bind(file.submission_id)
        .bind(&file.file_name)
        .bind(&file.file_path)
        .bind(file.file_size)
        .bind(&file.file_type)
        .bind(file.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_files(&self, submission_id: Uuid) -> RepoResult<Vec<SubmissionFile>> {
        let results = sqlx::query_as::<_, SubmissionFileModel>(
            r"
            SELECT id, submission_id, file_name, file_path, file_size, file_type, created_at
            FROM submission_files
            WHERE submission_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SubmissionFile::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: SubmissionStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE submissions
            SET status = $2::submission_status
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(submission_not_found(id));
        }

        Ok(())
    }
}
