//! Category service
//!
//! Category listing is part of the forum surface (approval-gated); creation
//! and edits are admin-only. Concurrent admin edits are last-writer-wins.

use tenantvoice_core::entities::Category;
use tenantvoice_core::policy::{self, Action, Actor};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all categories for an approved member
    #[instrument(skip(self))]
    pub async fn list(&self, actor_id: Option<Uuid>) -> ServiceResult<Vec<CategoryResponse>> {
        let actor = self.ctx.load_actor(actor_id).await?;
        policy::decide(Actor::from_account(actor.as_ref()), &Action::ViewForum).require()?;

        let categories = self.ctx.category_repo().list().await?;
        Ok(categories.iter().map(CategoryResponse::from).collect())
    }

    /// Create a new category (admin only)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        self.require_manager(actor_id).await?;

        let category = Category::new(
            Uuid::new_v4(),
            request.name,
            request.description,
            request.is_announcement,
        );
        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, "Category created");

        Ok(CategoryResponse::from(&category))
    }

    /// Update a category (admin only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor_id: Uuid,
        category_id: Uuid,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        self.require_manager(actor_id).await?;

        let mut category = self
            .ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        if let Some(name) = request.name {
            category.rename(name);
        }
        if let Some(description) = request.description {
            category.set_description(Some(description));
        }
        if let Some(is_announcement) = request.is_announcement {
            category.set_announcement(is_announcement);
        }

        self.ctx.category_repo().update(&category).await?;

        info!(category_id = %category.id, "Category updated");

        Ok(CategoryResponse::from(&category))
    }

    async fn require_manager(&self, actor_id: Uuid) -> ServiceResult<()> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;
        policy::decide(Actor::from_account(actor.as_ref()), &Action::ManageCategories)
            .require()?;
        Ok(())
    }
}
