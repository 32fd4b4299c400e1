//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{accounts, auth, categories, comments, health, submissions, topics};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(forum_routes())
        .merge(submission_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Account self-service routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/@me", get(accounts::get_own_account))
        .route("/accounts/@me", patch(accounts::update_own_account))
        .route("/accounts/:account_id", get(accounts::get_account))
}

/// Forum routes: categories, topics, comments
fn forum_routes() -> Router<AppState> {
    Router::new()
        // Categories
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/:category_id", patch(categories::update_category))
        // Topics
        .route("/topics", get(topics::list_topics))
        .route("/topics", post(topics::create_topic))
        .route("/topics/:topic_id", get(topics::get_topic))
        .route("/topics/:topic_id", delete(topics::delete_topic))
        .route("/topics/:topic_id/hide", post(topics::hide_topic))
        .route("/topics/:topic_id/unhide", post(topics::unhide_topic))
        // Comments
        .route("/topics/:topic_id/comments", get(comments::list_comments))
        .route("/topics/:topic_id/comments", post(comments::create_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
        .route("/comments/:comment_id/hide", post(comments::hide_comment))
        .route("/comments/:comment_id/unhide", post(comments::unhide_comment))
}

/// Public submission intake
fn submission_routes() -> Router<AppState> {
    Router::new().route("/submissions", post(submissions::create_submission))
}

/// Admin console routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Account moderation
        .route("/admin/accounts/pending", get(accounts::list_pending_accounts))
        .route("/admin/accounts/:account_id/approve", post(accounts::approve_account))
        .route("/admin/accounts/:account_id/reject", post(accounts::reject_account))
        .route("/admin/accounts/:account_id/promote", post(accounts::promote_account))
        .route("/admin/accounts/:account_id/demote", post(accounts::demote_account))
        // Submission review
        .route("/admin/submissions", get(submissions::list_submissions))
        .route("/admin/submissions/:submission_id", get(submissions::get_submission))
        .route(
            "/admin/submissions/:submission_id",
            patch(submissions::update_submission_status),
        )
}
