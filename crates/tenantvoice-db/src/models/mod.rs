//! Database row models

mod account;
mod category;
mod comment;
mod submission;
mod topic;

pub use account::AccountModel;
pub use category::CategoryModel;
pub use comment::{CommentListingModel, CommentModel};
pub use submission::{SubmissionFileModel, SubmissionModel};
pub use topic::{TopicListingModel, TopicModel};
