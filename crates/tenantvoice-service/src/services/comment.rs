//! Comment service
//!
//! Comments always load their parent topic first: creation against a hidden
//! topic is denied for non-admins as not-found so the hidden topic's
//! existence is not leaked.

use tenantvoice_core::entities::{Comment, Topic};
use tenantvoice_core::policy::{self, Action, Actor, Visibility};
use tenantvoice_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a topic's comments, oldest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor_id: Option<Uuid>,
        topic_id: Uuid,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let actor = self.ctx.load_actor(actor_id).await?;
        let actor = Actor::from_account(actor.as_ref());
        policy::decide(actor, &Action::ViewForum).require()?;

        let topic = self.load_topic(topic_id).await?;
        if topic.is_hidden && policy::visibility(actor) == Visibility::VisibleOnly {
            return Err(DomainError::TopicNotFound(topic_id).into());
        }

        let comments = self
            .ctx
            .comment_repo()
            .list_by_topic(topic.id, policy::visibility(actor))
            .await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to a topic
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor_id: Uuid,
        topic_id: Uuid,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;

        let topic = self.load_topic(topic_id).await?;

        policy::decide(
            Actor::from_account(actor.as_ref()),
            &Action::CreateComment { topic: &topic },
        )
        .require_with(|| DomainError::TopicNotFound(topic_id))?;

        let comment = Comment::new(Uuid::new_v4(), request.body, topic.id, actor_id);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, topic_id = %topic.id, "Comment created");

        let author_name = actor.and_then(|a| a.display_name);
        Ok(CommentResponse {
            id: comment.id,
            topic_id: comment.topic_id,
            body: comment.body,
            author_name,
            is_hidden: comment.is_hidden,
            created_at: comment.created_at,
        })
    }

    /// Hide a comment from member listings (admin only)
    #[instrument(skip(self))]
    pub async fn hide(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::HideComment).await?;
        self.ctx.comment_repo().set_hidden(comment_id, true).await?;
        info!(comment_id = %comment_id, "Comment hidden");
        Ok(())
    }

    /// Restore a hidden comment (admin only)
    #[instrument(skip(self))]
    pub async fn unhide(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::UnhideComment).await?;
        self.ctx.comment_repo().set_hidden(comment_id, false).await?;
        info!(comment_id = %comment_id, "Comment unhidden");
        Ok(())
    }

    /// Delete a comment (admin only)
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<()> {
        self.require_moderator(actor_id, &Action::DeleteComment).await?;
        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id = %comment_id, "Comment deleted");
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
