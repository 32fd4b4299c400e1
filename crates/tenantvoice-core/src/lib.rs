//! # tenantvoice-core
//!
//! Domain layer containing entities, the access policy engine, and repository
//! traits. This crate has zero dependencies on infrastructure (database, web
//! framework, etc.); every policy decision is computed from state the caller
//! passes in.

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Account, AccountRole, AccountStatus, Category, Comment, CommentListing, IssueType,
    Submission, SubmissionFile, SubmissionStatus, Topic, TopicListing,
};
pub use error::DomainError;
pub use policy::{decide, Action, Actor, Decision, DenyReason, Visibility};
pub use traits::{
    AccountRepository, CategoryRepository, CommentRepository, RepoResult, SubmissionRepository,
    TopicQuery, TopicRepository,
};
