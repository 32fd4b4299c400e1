//! Topic service
//!
//! Listing and reads are approval-gated with hidden rows filtered in the
//! query layer; creation enforces the announcement-category restriction;
//! hide/unhide/delete are admin moderation actions.

use tenantvoice_core::entities::Topic;
use tenantvoice_core::policy::{self, Action, Actor, Visibility};
use tenantvoice_core::traits::TopicQuery;
use tenantvoice_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateTopicRequest, TopicResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Topic service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    /// Create a new TopicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List topics, optionally scoped to one category. Non-admin viewers
    /// never see hidden topics; admins see them tagged hidden.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor_id: Option<Uuid>,
        category_id: Option<Uuid>,
    ) -> ServiceResult<Vec<TopicResponse>> {
        let actor = self.ctx.load_actor(actor_id).await?;
        let actor = Actor::from_account(actor.as_ref());
        policy::decide(actor, &Action::ViewForum).require()?;

        let listings = self
            .ctx
            .topic_repo()
            .list(TopicQuery {
                category_id,
                visibility: policy::visibility(actor),
            })
            .await?;

        Ok(listings.into_iter().map(TopicResponse::from).collect())
    }

    /// Get a single topic with its listing context
    #[instrument(skip(self))]
    pub async fn get(&self, actor_id: Option<Uuid>, topic_id: Uuid) -> ServiceResult<TopicResponse> {
        let actor = self.ctx.load_actor(actor_id).await?;
        let actor = Actor::from_account(actor.as_ref());
        policy::decide(actor, &Action::ViewForum).require()?;

        let topic = self.load_topic(topic_id).await?;
        if topic.is_hidden && policy::visibility(actor) == Visibility::VisibleOnly {
            return Err(DomainError::TopicNotFound(topic_id).into());
        }

        let category = self
            .ctx
            .category_repo()
            .find_by_id(topic.category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(topic.category_id))?;
        let author = self.ctx.account_repo().find_by_id(topic.created_by).await?;
        let comments = self
            .ctx
            .comment_repo()
            .list_by_topic(topic.id, policy::visibility(actor))
            .await?;

        Ok(TopicResponse {
            id: topic.id,
            title: topic.title,
            body: topic.body,
            category_id: category.id,
            category_name: category.name,
            is_announcement: category.is_announcement,
            author_name: author.and_then(|a| a.display_name),
            comment_count: comments.len() as i64,
            is_hidden: topic.is_hidden,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        })
    }

    /// Create a topic. Approved members only; announcement categories are
    /// further restricted to admins.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateTopicRequest,
    ) -> ServiceResult<TopicResponse> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;

        let category = self
            .ctx
            .category_repo()
            .find_by_id(request.category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", request.category_id.to_string()))?;

        policy::decide(
            Actor::from_account(actor.as_ref()),
            &Action::CreateTopic { category: &category },
        )
        .require()?;

        let topic = Topic::new(
            Uuid::new_v4(),
            request.title,
            request.body,
            category.id,
            actor_id,
        );
        self.ctx.topic_repo().create(&topic).await?;

        info!(topic_id = %topic.id, category_id = %category.id, "Topic created");

        let author_name = actor.and_then(|a| a.display_name);
        Ok(TopicResponse {
            id: topic.id,
            title: topic.title,
            body: topic.body,
            category_id: category.id,
            category_name: category.name,
            is_announcement: category.is_announcement,
            author_name,
            comment_count: 0,
            is_hidden: topic.is_hidden,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        })
    }

    /// Hide a topic from member listings (admin only)
    #[instrument(skip(self))]
    pub async fn hide(&self, actor_id: Uuid, topic_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::HideTopic).await?;
        self.ctx.topic_repo().set_hidden(topic_id, true).await?;
        info!(topic_id = %topic_id, "Topic hidden");
        Ok(())
    }

    /// Restore a hidden topic (admin only)
    #[instrument(skip(self))]
    pub async fn unhide(&self, actor_id: Uuid, topic_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::UnhideTopic).await?;
        self.ctx.topic_repo().set_hidden(topic_id, false).await?;
        info!(topic_id = %topic_id, "Topic unhidden");
        Ok(())
    }

    /// Delete a topic and, through the store cascade, all its comments
    /// (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: Uuid, topic_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::DeleteTopic).await?;
        self.ctx.topic_repo().delete(topic_id).await?;
        info!(topic_id = %topic_id, "Topic deleted with its comments");
        Ok(())
    }

    async fn require_moderator(&self, actor_id: Uuid, action: &Action<'_>) -> ServiceResult<()> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;
        policy::decide(Actor::from_account(actor.as_ref()), action).require()?;
        Ok(())
    }

    async fn load_topic(&self, topic_id: Uuid) -> ServiceResult<Topic> {
        self.ctx
            .topic_repo()
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", topic_id.to_string()))
    }
}
