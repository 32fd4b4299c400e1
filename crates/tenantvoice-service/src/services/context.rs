//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every request handler needs.
//! There is deliberately no cache of accounts or policy decisions here: each
//! request loads the actor's account fresh and evaluates policy from it.

use std::sync::Arc;

use tenantvoice_common::JwtService;
use tenantvoice_core::entities::Account;
use tenantvoice_core::traits::{
    AccountRepository, CategoryRepository, CommentRepository, SubmissionRepository,
    TopicRepository,
};
use tenantvoice_db::PgPool;
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    account_repo: Arc<dyn AccountRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        account_repo: Arc<dyn AccountRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            account_repo,
            category_repo,
            topic_repo,
            comment_repo,
            submission_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the topic repository
    pub fn topic_repo(&self) -> &dyn TopicRepository {
        self.topic_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the submission repository
    pub fn submission_repo(&self) -> &dyn SubmissionRepository {
        self.submission_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Resolve the actor's account for a request. `None` means anonymous; a
    /// bearer identity whose account row is missing is an error, since every
    /// authenticated identity has exactly one account.
    pub async fn load_actor(&self, account_id: Option<Uuid>) -> ServiceResult<Option<Account>> {
        match account_id {
            None => Ok(None),
            Some(id) => {
                let account = self
                    .account_repo()
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Account", id.to_string()))?;
                Ok(Some(account))
            }
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    account_repo: Option<Arc<dyn AccountRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    topic_repo: Option<Arc<dyn TopicRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    submission_repo: Option<Arc<dyn SubmissionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            account_repo: None,
            category_repo: None,
            topic_repo: None,
            comment_repo: None,
            submission_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn topic_repo(mut self, repo: Arc<dyn TopicRepository>) -> Self {
        self.topic_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn submission_repo(mut self, repo: Arc<dyn SubmissionRepository>) -> Self {
        self.submission_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.topic_repo
                .ok_or_else(|| ServiceError::validation("topic_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.submission_repo
                .ok_or_else(|| ServiceError::validation("submission_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
