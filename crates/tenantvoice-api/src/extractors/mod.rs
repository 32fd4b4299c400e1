//! Request extractors

mod auth;
mod validated;

pub use auth::{AuthAccount, OptionalAuthAccount};
pub use validated::ValidatedJson;
