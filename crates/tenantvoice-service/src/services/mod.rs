//! Application services
//!
//! Each service borrows the [`ServiceContext`], loads whatever account and
//! resource state a request needs, evaluates the access policy, and only then
//! performs repository writes.

mod account;
mod auth;
mod category;
mod comment;
mod context;
mod error;
mod moderation;
mod submission;
mod topic;

pub use account::AccountService;
pub use auth::AuthService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use submission::SubmissionService;
pub use topic::TopicService;
