//! # tenantvoice-service
//!
//! Application layer containing business logic, services, and DTOs. Every
//! mutating operation loads the actor's account, evaluates the access policy,
//! and only then touches a repository.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AccountResponse, AuthResponse, CategoryResponse, CommentResponse, CreateCategoryRequest,
    CreateCommentRequest, CreateSubmissionRequest, CreateTopicRequest, LoginRequest,
    RefreshTokenRequest, RegisterRequest, SubmissionCreatedResponse, SubmissionDetailResponse,
    SubmissionFileRequest, SubmissionFileResponse, SubmissionResponse, TopicResponse,
    UpdateAccountRequest, UpdateCategoryRequest, UpdateSubmissionStatusRequest,
};
pub use services::{
    AccountService, AuthService, CategoryService, CommentService, ModerationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SubmissionService,
    TopicService,
};
