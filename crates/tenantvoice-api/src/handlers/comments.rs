//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tenantvoice_service::{CommentResponse, CommentService, CreateCommentRequest};

use super::parse_id;
use crate::extractors::{AuthAccount, OptionalAuthAccount, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a topic's comments
///
/// GET /topics/:topic_id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: OptionalAuthAccount,
    Path(topic_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = CommentService::new(state.service_context());
    let response = service.list(auth.account_id(), topic_id).await?;
    Ok(Json(response))
}

/// Add a comment to a topic
///
/// POST /topics/:topic_id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(topic_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = CommentService::new(state.service_context());
    let response = service.create(auth.account_id, topic_id, request).await?;
    Ok(Created(Json(response)))
}

/// Hide a comment (admin)
///
/// POST /comments/:comment_id/hide
pub async fn hide_comment(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service.hide(auth.account_id, comment_id).await?;
    Ok(NoContent)
}

/// Restore a hidden comment (admin)
///
/// POST /comments/:comment_id/unhide
pub async fn unhide_comment(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service.unhide(auth.account_id, comment_id).await?;
    Ok(NoContent)
}

/// Delete a comment (admin)
///
/// DELETE /comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = CommentService::new(state.service_context());
    service.delete(auth.account_id, comment_id).await?;
    Ok(NoContent)
}
