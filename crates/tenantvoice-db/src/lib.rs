//! # tenantvoice-db
//!
//! PostgreSQL persistence layer: row models, entity mappers, and repository
//! implementations. Hidden-content filtering happens here, in SQL, driven by
//! the policy layer's visibility value.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_env, DatabaseConfig};
pub use repositories::{
    PgAccountRepository, PgCategoryRepository, PgCommentRepository, PgSubmissionRepository,
    PgTopicRepository,
};
pub use sqlx::PgPool;
