//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AccountRepository, CategoryRepository, CommentRepository, RepoResult, SubmissionRepository,
    TopicQuery, TopicRepository,
};
