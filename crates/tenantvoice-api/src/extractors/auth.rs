//! Authentication extractor
//!
//! Extracts and validates JWT bearer tokens from the Authorization header.
//! The extractor yields only the identity; the account record itself is
//! loaded per-request by the service layer before any policy decision.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated account identity extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Account ID from the JWT token
    pub account_id: Uuid,
}

impl AuthAccount {
    /// Create a new AuthAccount
    pub fn new(account_id: Uuid) -> Self {
        Self { account_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract account ID from claims
        let account_id = claims.account_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid account ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthAccount::new(account_id))
    }
}

/// Optional authenticated account
///
/// Returns None if no authorization header is present, or an error if a
/// token is present but invalid. Used by endpoints anonymous visitors may
/// also reach.
#[derive(Debug, Clone)]
pub struct OptionalAuthAccount(pub Option<AuthAccount>);

impl OptionalAuthAccount {
    /// The account id, if authenticated
    pub fn account_id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|auth| auth.account_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthAccount
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);

                let claims = app_state
                    .jwt_service()
                    .validate_access_token(bearer.token())
                    .map_err(|e| {
                        tracing::warn!(error = %e, "Invalid access token");
                        ApiError::InvalidAuthFormat
                    })?;

                let account_id = claims.account_id().map_err(|e| {
                    tracing::warn!(error = %e, "Invalid account ID in token");
                    ApiError::InvalidAuthFormat
                })?;

                Ok(OptionalAuthAccount(Some(AuthAccount::new(account_id))))
            }
            Err(_) => Ok(OptionalAuthAccount(None)),
        }
    }
}
