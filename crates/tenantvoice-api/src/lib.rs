//! # tenantvoice-api
//!
//! REST API server for the tenant-advocacy platform: auth, account
//! self-service, the moderated forum, the admin console, and incident
//! submission intake.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_with_config, run, run_server};
pub use state::AppState;
