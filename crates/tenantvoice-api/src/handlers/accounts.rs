//! Account handlers
//!
//! Self-service endpoints plus the admin moderation console actions.

use axum::{
    extract::{Path, State},
    Json,
};
use tenantvoice_service::{
    AccountResponse, AccountService, ModerationService, UpdateAccountRequest,
};

use super::parse_id;
use crate::extractors::{AuthAccount, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's own account and moderation status
///
/// GET /accounts/@me
pub async fn get_own_account(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> ApiResult<Json<AccountResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.get_own_account(auth.account_id).await?;
    Ok(Json(response))
}

/// Update the caller's display name
///
/// PATCH /accounts/@me
pub async fn update_own_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.update_own_account(auth.account_id, request).await?;
    Ok(Json(response))
}

/// Get an account's status (self or admin)
///
/// GET /accounts/:account_id
pub async fn get_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = parse_id(&account_id, "account_id")?;

    let service = AccountService::new(state.service_context());
    let response = service.get_account(Some(auth.account_id), account_id).await?;
    Ok(Json(response))
}

/// List accounts awaiting approval
///
/// GET /admin/accounts/pending
pub async fn list_pending_accounts(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> ApiResult<Json<Vec<AccountResponse>>> {
    let service = ModerationService::new(state.service_context());
    let response = service.list_pending(auth.account_id).await?;
    Ok(Json(response))
}

/// Approve an account
///
/// POST /admin/accounts/:account_id/approve
pub async fn approve_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = parse_id(&account_id, "account_id")?;

    let service = ModerationService::new(state.service_context());
    let response = service.approve(auth.account_id, account_id).await?;
    Ok(Json(response))
}

/// Reject an account
///
/// POST /admin/accounts/:account_id/reject
pub async fn reject_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = parse_id(&account_id, "account_id")?;

    let service = ModerationService::new(state.service_context());
    let response = service.reject(auth.account_id, account_id).await?;
    Ok(Json(response))
}

/// Promote an account to admin
///
/// POST /admin/accounts/:account_id/promote
pub async fn promote_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = parse_id(&account_id, "account_id")?;

    let service = ModerationService::new(state.service_context());
    let response = service.promote(auth.account_id, account_id).await?;
    Ok(Json(response))
}

/// Demote an admin back to an ordinary member
///
/// POST /admin/accounts/:account_id/demote
pub async fn demote_account(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(account_id): Path<String>,
) -> ApiResult<Json<AccountResponse>> {
    let account_id = parse_id(&account_id, "account_id")?;

    let service = ModerationService::new(state.service_context());
    let response = service.demote(auth.account_id, account_id).await?;
    Ok(Json(response))
}
