//! Request handlers organized by domain

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod health;
pub mod submissions;
pub mod topics;

use uuid::Uuid;

use crate::response::ApiError;

/// Parse a path segment as a UUID
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}
