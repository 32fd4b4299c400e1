//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. All mutations are expected to be atomic
//! single-row operations; the one cascade (topic delete removing its
//! comments) must be atomic at the store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Account, AccountRole, AccountStatus, Category, Comment, CommentListing, Submission,
    SubmissionFile, SubmissionStatus, Topic, TopicListing,
};
use crate::error::DomainError;
use crate::policy::Visibility;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Check if email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new account with its credential hash
    async fn create(&self, account: &Account, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// List pending accounts, oldest signup first
    async fn list_pending(&self) -> RepoResult<Vec<Account>>;

    /// Update moderation status
    async fn update_status(&self, id: Uuid, status: AccountStatus) -> RepoResult<()>;

    /// Update role and status together (promotion forces approved)
    async fn update_role(&self, id: Uuid, role: AccountRole, status: AccountStatus)
        -> RepoResult<()>;

    /// Update display name
    async fn update_display_name(&self, id: Uuid, display_name: Option<&str>) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Category>>;

    /// List all categories ordered by name
    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, category: &Category) -> RepoResult<()>;

    /// Update an existing category
    async fn update(&self, category: &Category) -> RepoResult<()>;
}

// ============================================================================
// Topic Repository
// ============================================================================

/// Listing filter for topic queries
#[derive(Debug, Clone, Copy)]
pub struct TopicQuery {
    pub category_id: Option<Uuid>,
    pub visibility: Visibility,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Find topic by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Topic>>;

    /// List topics with author and category context, newest first
    async fn list(&self, query: TopicQuery) -> RepoResult<Vec<TopicListing>>;

    /// Create a new topic
    async fn create(&self, topic: &Topic) -> RepoResult<()>;

    /// Set the hidden flag
    async fn set_hidden(&self, id: Uuid, hidden: bool) -> RepoResult<()>;

    /// Delete the topic; comments go with it via the store's cascade
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Comment>>;

    /// List comments for a topic with author context, oldest first
    async fn list_by_topic(
        &self,
        topic_id: Uuid,
        visibility: Visibility,
    ) -> RepoResult<Vec<CommentListing>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Set the hidden flag
    async fn set_hidden(&self, id: Uuid, hidden: bool) -> RepoResult<()>;

    /// Delete a single comment (no cascade; comments are leaves)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Submission Repository
// ============================================================================

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Find submission by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Submission>>;

    /// List all submissions, newest first
    async fn list(&self) -> RepoResult<Vec<Submission>>;

    /// Create a new submission
    async fn create(&self, submission: &Submission) -> RepoResult<()>;

    /// Attach an evidence metadata row
    async fn attach_file(&self, file: &SubmissionFile) -> RepoResult<()>;

    /// List evidence metadata for a submission
    async fn list_files(&self, submission_id: Uuid) -> RepoResult<Vec<SubmissionFile>>;

    /// Update review status
    async fn update_status(&self, id: Uuid, status: SubmissionStatus) -> RepoResult<()>;
}
