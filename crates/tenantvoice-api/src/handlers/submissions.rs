//! Incident submission handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tenantvoice_service::{
    CreateSubmissionRequest, SubmissionCreatedResponse, SubmissionDetailResponse,
    SubmissionResponse, SubmissionService, UpdateSubmissionStatusRequest,
};

use super::parse_id;
use crate::extractors::{AuthAccount, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// File an incident report (no authentication required)
///
/// POST /submissions
pub async fn create_submission(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSubmissionRequest>,
) -> ApiResult<Created<Json<SubmissionCreatedResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List all submissions (admin)
///
/// GET /admin/submissions
pub async fn list_submissions(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> ApiResult<Json<Vec<SubmissionResponse>>> {
    let service = SubmissionService::new(state.service_context());
    let response = service.list(auth.account_id).await?;
    Ok(Json(response))
}

/// Get a submission with its evidence files (admin)
///
/// GET /admin/submissions/:submission_id
pub async fn get_submission(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(submission_id): Path<String>,
) -> ApiResult<Json<SubmissionDetailResponse>> {
    let submission_id = parse_id(&submission_id, "submission_id")?;

    let service = SubmissionService::new(state.service_context());
    let response = service.get(auth.account_id, submission_id).await?;
    Ok(Json(response))
}

/// Update a submission's review status (admin)
///
/// PATCH /admin/submissions/:submission_id
pub async fn update_submission_status(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(submission_id): Path<String>,
    Json(request): Json<UpdateSubmissionStatusRequest>,
) -> ApiResult<Json<SubmissionResponse>> {
    let submission_id = parse_id(&submission_id, "submission_id")?;

    let service = SubmissionService::new(state.service_context());
    let response = service
        .update_status(auth.account_id, submission_id, request)
        .await?;
    Ok(Json(response))
}
