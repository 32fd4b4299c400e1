//! Topic handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tenantvoice_service::{CreateTopicRequest, TopicResponse, TopicService};

use super::parse_id;
use crate::extractors::{AuthAccount, OptionalAuthAccount, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for topic listing
#[derive(Debug, Deserialize)]
pub struct TopicListQuery {
    pub category_id: Option<String>,
}

/// List topics, optionally filtered by category. Anonymous requests reach
/// the policy engine and are denied there with their reason.
///
/// GET /topics?category_id=...
pub async fn list_topics(
    State(state): State<AppState>,
    auth: OptionalAuthAccount,
    Query(query): Query<TopicListQuery>,
) -> ApiResult<Json<Vec<TopicResponse>>> {
    let category_id = query
        .category_id
        .map(|raw| parse_id(&raw, "category_id"))
        .transpose()?;

    let service = TopicService::new(state.service_context());
    let response = service.list(auth.account_id(), category_id).await?;
    Ok(Json(response))
}

/// Create a topic
///
/// POST /topics
pub async fn create_topic(
    State(state): State<AppState>,
    auth: AuthAccount,
    ValidatedJson(request): ValidatedJson<CreateTopicRequest>,
) -> ApiResult<Created<Json<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let response = service.create(auth.account_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a topic
///
/// GET /topics/:topic_id
pub async fn get_topic(
    State(state): State<AppState>,
    auth: OptionalAuthAccount,
    Path(topic_id): Path<String>,
) -> ApiResult<Json<TopicResponse>> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    let response = service.get(auth.account_id(), topic_id).await?;
    Ok(Json(response))
}

/// Hide a topic (admin)
///
/// POST /topics/:topic_id/hide
pub async fn hide_topic(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(topic_id): Path<String>,
) -> ApiResult<NoContent> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    service.hide(auth.account_id, topic_id).await?;
    Ok(NoContent)
}

/// Restore a hidden topic (admin)
///
/// POST /topics/:topic_id/unhide
pub async fn unhide_topic(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(topic_id): Path<String>,
) -> ApiResult<NoContent> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    service.unhide(auth.account_id, topic_id).await?;
    Ok(NoContent)
}

/// Delete a topic and its comments (admin)
///
/// DELETE /topics/:topic_id
pub async fn delete_topic(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(topic_id): Path<String>,
) -> ApiResult<NoContent> {
    let topic_id = parse_id(&topic_id, "topic_id")?;

    let service = TopicService::new(state.service_context());
    service.delete(auth.account_id, topic_id).await?;
    Ok(NoContent)
}
