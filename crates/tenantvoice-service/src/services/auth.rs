//! Authentication service
//!
//! Handles account registration, login, and token refresh. Registration is
//! the signup path: the account row is created immediately, status pending,
//! so a fresh signup can read its own status but sees no forum content until
//! an admin approves it.

use tenantvoice_common::auth::{hash_password, validate_password_strength, verify_password};
use tenantvoice_common::AppError;
use tenantvoice_core::entities::Account;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AccountResponse, AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account (idempotency on email: a second registration
    /// with the same email is a conflict, never a second row)
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut account = Account::new(Uuid::new_v4(), request.email);
        if request.display_name.is_some() {
            account.set_display_name(request.display_name);
        }

        self.ctx.account_repo().create(&account, &password_hash).await?;

        info!(account_id = %account.id, "Account registered, pending approval");

        self.token_response(&account)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .account_repo()
            .get_password_hash(account.id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = %account.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(account_id = %account.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(account_id = %account.id, "Account logged in");

        self.token_response(&account)
    }

    /// Exchange a refresh token for a fresh token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let account_id = claims.account_id().map_err(ServiceError::from)?;

        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", account_id.to_string()))?;

        self.token_response(&account)
    }

    fn token_response(&self, account: &Account) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(account.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            AccountResponse::from(account),
        ))
    }
}
