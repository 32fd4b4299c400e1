//! PostgreSQL repository implementations

mod account;
mod category;
mod comment;
mod error;
mod submission;
mod topic;

pub use account::PgAccountRepository;
pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use submission::PgSubmissionRepository;
pub use topic::PgTopicRepository;
