//! Integration test support library
//!
//! Spawns the real API server against a PostgreSQL instance and drives it
//! over HTTP. Tests are skipped when DATABASE_URL is not set.

pub mod fixtures;
pub mod helpers;

pub use helpers::{
    assert_json, assert_status, check_test_env, make_admin, make_approved, TestServer,
};
