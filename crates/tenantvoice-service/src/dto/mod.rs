//! Request and response DTOs

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateCategoryRequest, CreateCommentRequest, CreateSubmissionRequest, CreateTopicRequest,
    LoginRequest, RefreshTokenRequest, RegisterRequest, SubmissionFileRequest,
    UpdateAccountRequest, UpdateCategoryRequest, UpdateSubmissionStatusRequest,
};
pub use responses::{
    AccountResponse, AuthResponse, CategoryResponse, CommentResponse, SubmissionCreatedResponse,
    SubmissionDetailResponse, SubmissionFileResponse, SubmissionResponse, TopicResponse,
};
