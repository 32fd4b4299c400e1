//! Account self-service
//!
//! Reading own status and updating the display name. Status reads are gated
//! by the policy engine: an account may read itself, admins may read anyone.

use tenantvoice_core::policy::{self, Action, Actor};
use tracing::instrument;
use uuid::Uuid;

use crate::dto::{AccountResponse, UpdateAccountRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's own account
    #[instrument(skip(self))]
    pub async fn get_own_account(&self, actor_id: Uuid) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", actor_id.to_string()))?;

        Ok(AccountResponse::from(&account))
    }

    /// Get an account's status (self or admin)
    #[instrument(skip(self))]
    pub async fn get_account(
        &self,
        actor_id: Option<Uuid>,
        target_id: Uuid,
    ) -> ServiceResult<AccountResponse> {
        let actor = self.ctx.load_actor(actor_id).await?;
        policy::decide(
            Actor::from_account(actor.as_ref()),
            &Action::ReadAccountStatus { account_id: target_id },
        )
        .require()?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", target_id.to_string()))?;

        Ok(AccountResponse::from(&account))
    }

    /// Update the caller's display name
    #[instrument(skip(self, request))]
    pub async fn update_own_account(
        &self,
        actor_id: Uuid,
        request: UpdateAccountRequest,
    ) -> ServiceResult<AccountResponse> {
        let mut account = self
            .ctx
            .account_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", actor_id.to_string()))?;

        account.set_display_name(request.display_name);
        self.ctx
            .account_repo()
            .update_display_name(account.id, account.display_name.as_deref())
            .await?;

        Ok(AccountResponse::from(&account))
    }
}
