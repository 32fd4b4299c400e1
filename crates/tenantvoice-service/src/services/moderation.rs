//! Account moderation workflow
//!
//! The admin-gated account transitions: approve, reject, promote, demote.
//! Approve is idempotent so two concurrent approvals of the same pending
//! account both report success.

use tenantvoice_core::entities::Account;
use tenantvoice_core::policy::{self, Action, Actor};
use tenantvoice_core::DomainError;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::AccountResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Moderation service for account transitions
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List accounts awaiting approval, oldest signup first
    #[instrument(skip(self))]
    pub async fn list_pending(&self, actor_id: Uuid) -> ServiceResult<Vec<AccountResponse>> {
        self.require_moderator(actor_id).await?;

        let accounts = self.ctx.account_repo().list_pending().await?;
        Ok(accounts.iter().map(AccountResponse::from).collect())
    }

    /// Approve an account (pending or rejected). Approving an approved
    /// account is a successful no-op.
    #[instrument(skip(self))]
    pub async fn approve(&self, actor_id: Uuid, account_id: Uuid) -> ServiceResult<AccountResponse> {
        self.require_moderator(actor_id).await?;
        let mut account = self.load_target(account_id).await?;

        if account.approve() {
            self.ctx
                .account_repo()
                .update_status(account.id, account.status)
                .await?;
            info!(account_id = %account.id, "Account approved");
        } else {
            debug!(account_id = %account.id, "Account already approved");
        }

        Ok(AccountResponse::from(&account))
    }

    /// Reject an account. Admin accounts cannot be rejected directly.
    #[instrument(skip(self))]
    pub async fn reject(&self, actor_id: Uuid, account_id: Uuid) -> ServiceResult<AccountResponse> {
        self.require_moderator(actor_id).await?;
        let mut account = self.load_target(account_id).await?;

        if account.is_admin() {
            return Err(DomainError::CannotRejectAdmin.into());
        }

        if account.reject() {
            self.ctx
                .account_repo()
                .update_status(account.id, account.status)
                .await?;
            info!(account_id = %account.id, "Account rejected");
        }

        Ok(AccountResponse::from(&account))
    }

    /// Promote an account to admin; forces status to approved
    #[instrument(skip(self))]
    pub async fn promote(&self, actor_id: Uuid, account_id: Uuid) -> ServiceResult<AccountResponse> {
        self.require_moderator(actor_id).await?;
        let mut account = self.load_target(account_id).await?;

        if account.promote() {
            self.ctx
                .account_repo()
                .update_role(account.id, account.role, account.status)
                .await?;
            info!(account_id = %account.id, "Account promoted to admin");
        }

        Ok(AccountResponse::from(&account))
    }

    /// Demote an admin back to an ordinary (still approved) member
    #[instrument(skip(self))]
    pub async fn demote(&self, actor_id: Uuid, account_id: Uuid) -> ServiceResult<AccountResponse> {
        self.require_moderator(actor_id).await?;

        if actor_id == account_id {
            return Err(DomainError::CannotDemoteSelf.into());
        }

        let mut account = self.load_target(account_id).await?;

        if account.demote() {
            self.ctx
                .account_repo()
                .update_role(account.id, account.role, account.status)
                .await?;
            info!(account_id = %account.id, "Admin demoted");
        }

        Ok(AccountResponse::from(&account))
    }

    async fn require_moderator(&self, actor_id: Uuid) -> ServiceResult<()> {
        let actor = self.ctx.load_actor(Some(actor_id)).await?;
        policy::decide(Actor::from_account(actor.as_ref()), &Action::ModerateAccounts)
            .require()?;
        Ok(())
    }

    async fn load_target(&self, account_id: Uuid) -> ServiceResult<Account> {
        self.ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", account_id.to_string()))
    }
}
