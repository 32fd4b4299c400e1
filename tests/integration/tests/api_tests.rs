//! API integration tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, make_admin, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

/// Register a fresh account and return (account_id, access_token).
/// The account starts pending.
async fn register(server: &TestServer) -> (Uuid, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.account.status, "pending");
    (auth.account.id.parse().unwrap(), auth.access_token)
}

/// Register a fresh account and promote it to admin through the repository.
/// The access token stays valid: tokens carry only the identity, and the
/// account record is reloaded on every request.
async fn register_admin(server: &TestServer) -> (Uuid, String) {
    let (account_id, token) = register(server).await;
    make_admin(account_id).await.unwrap();

    let response = server.get_auth("/api/v1/accounts/@me", &token).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(account.role, "admin");
    assert_eq!(account.status, "approved");

    (account_id, token)
}

/// Create a category as the given admin
async fn create_category(server: &TestServer, admin_token: &str, announcement: bool) -> String {
    let request = if announcement {
        CreateCategoryRequest::announcement()
    } else {
        CreateCategoryRequest::unique()
    };
    let response = server
        .post_auth("/api/v1/categories", admin_token, &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    category.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_starts_pending() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.account.email, request.email);
    assert_eq!(auth.account.status, "pending");
    assert_eq!(auth.account.role, "user");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.account.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Access Policy Tests
// ============================================================================

#[tokio::test]
async fn test_pending_account_cannot_view_forum() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register(&server).await;

    let response = server.get_auth("/api/v1/topics", &token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_APPROVED");

    let response = server.get_auth("/api/v1/categories", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_anonymous_cannot_view_forum() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/topics").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_approve_unlocks_forum() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;

    // Pending: forum denied
    let response = server.get_auth("/api/v1/topics", &member_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admin approves
    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(account.status, "approved");

    // Approved: forum allowed
    let response = server.get_auth("/api/v1/topics", &member_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_approve_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, _) = register(&server).await;

    let path = format!("/api/v1/admin/accounts/{member_id}/approve");

    let response = server.post_auth_empty(&path, &admin_token).await.unwrap();
    let first: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.status, "approved");

    // Second approve succeeds without error and changes nothing
    let response = server.post_auth_empty(&path, &admin_token).await.unwrap();
    let second: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.status, "approved");
    assert_eq!(first.created_at, second.created_at);
}

#[tokio::test]
async fn test_non_admin_cannot_moderate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;
    let (other_id, _) = register(&server).await;

    server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();

    // An approved member still cannot approve others
    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{other_id}/approve"),
            &member_token,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_ADMIN");

    // Nor list pending accounts
    let response = server
        .get_auth("/api/v1/admin/accounts/pending", &member_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_announcement_category_restriction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;

    server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();

    let announcement_id = create_category(&server, &admin_token, true).await;

    // Approved member is denied with the category restriction reason
    let request = CreateTopicRequest::in_category(&announcement_id);
    let response = server
        .post_auth("/api/v1/topics", &member_token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "WRONG_CATEGORY_RESTRICTION");

    // Admin may post into the same category
    let request = CreateTopicRequest::in_category(&announcement_id);
    let response = server
        .post_auth("/api/v1/topics", &admin_token, &request)
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(topic.is_announcement);
}

#[tokio::test]
async fn test_hidden_topic_visibility_split() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;

    server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();

    let category_id = create_category(&server, &admin_token, false).await;
    let request = CreateTopicRequest::in_category(&category_id);
    let response = server
        .post_auth("/api/v1/topics", &member_token, &request)
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Admin hides the topic
    let response = server
        .post_auth_empty(&format!("/api/v1/topics/{}/hide", topic.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Member listing excludes it; detail read is not found
    let response = server
        .get_auth(
            &format!("/api/v1/topics?category_id={category_id}"),
            &member_token,
        )
        .await
        .unwrap();
    let topics: Vec<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(topics.iter().all(|t| t.id != topic.id));

    let response = server
        .get_auth(&format!("/api/v1/topics/{}", topic.id), &member_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Admin listing includes it, tagged hidden
    let response = server
        .get_auth(
            &format!("/api/v1/topics?category_id={category_id}"),
            &admin_token,
        )
        .await
        .unwrap();
    let topics: Vec<TopicResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let hidden = topics.iter().find(|t| t.id == topic.id).expect("admin sees hidden");
    assert!(hidden.is_hidden);

    // Unhide restores member visibility
    let response = server
        .post_auth_empty(&format!("/api/v1/topics/{}/unhide", topic.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/topics/{}", topic.id), &member_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_topic_cascades_comments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;

    server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();

    let category_id = create_category(&server, &admin_token, false).await;
    let request = CreateTopicRequest::in_category(&category_id);
    let response = server
        .post_auth("/api/v1/topics", &member_token, &request)
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for body in ["Same issue on my floor.", "Management was notified last month."] {
        let response = server
            .post_auth(
                &format!("/api/v1/topics/{}/comments", topic.id),
                &member_token,
                &CreateCommentRequest::simple(body),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    // Member cannot delete
    let response = server
        .delete_auth(&format!("/api/v1/topics/{}", topic.id), &member_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admin deletes; topic and comments are gone together
    let response = server
        .delete_auth(&format!("/api/v1/topics/{}", topic.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/topics/{}/comments", topic.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_hidden_comment_filtered_for_members() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (member_id, member_token) = register(&server).await;

    server
        .post_auth_empty(
            &format!("/api/v1/admin/accounts/{member_id}/approve"),
            &admin_token,
        )
        .await
        .unwrap();

    let category_id = create_category(&server, &admin_token, false).await;
    let request = CreateTopicRequest::in_category(&category_id);
    let response = server
        .post_auth("/api/v1/topics", &member_token, &request)
        .await
        .unwrap();
    let topic: TopicResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/topics/{}/comments", topic.id),
            &member_token,
            &CreateCommentRequest::simple("This comment will be hidden."),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/comments/{}/hide", comment.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/topics/{}/comments", topic.id), &member_token)
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.iter().all(|c| c.id != comment.id));

    let response = server
        .get_auth(&format!("/api/v1/topics/{}/comments", topic.id), &admin_token)
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.iter().any(|c| c.id == comment.id && c.is_hidden));
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_submission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateSubmissionRequest::anonymous()
        .with_file("leak.jpg", 1024 * 1024, "image/jpeg");

    let response = server.post("/api/v1/submissions", &request).await.unwrap();
    let created: SubmissionCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.reference_id.starts_with("JWC-"));
}

#[tokio::test]
async fn test_submission_rejects_unsupported_file_type() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateSubmissionRequest::anonymous()
        .with_file("malware.exe", 1024, "application/x-msdownload");

    let response = server.post("/api/v1/submissions", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_submission_review_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = register_admin(&server).await;
    let (_, member_token) = register(&server).await;

    let request = CreateSubmissionRequest::anonymous();
    let response = server.post("/api/v1/submissions", &request).await.unwrap();
    let created: SubmissionCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Non-admin denied
    let response = server
        .get_auth("/api/v1/admin/submissions", &member_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Admin lists and reviews
    let response = server
        .get_auth("/api/v1/admin/submissions", &admin_token)
        .await
        .unwrap();
    let submissions: Vec<SubmissionResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(submissions.iter().any(|s| s.id == created.id));

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/submissions/{}", created.id),
            &admin_token,
            &UpdateSubmissionStatusRequest {
                status: "reviewed".to_string(),
            },
        )
        .await
        .unwrap();
    let updated: SubmissionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "reviewed");
}
