//! Integration test suite (requires a real ServiceWorks account).
//!
//! Run all integration tests with:
//!   SERVICEWORKS_USERNAME=... SERVICEWORKS_PASSWORD=... SERVICEWORKS_API_KEY=... \
//!   cargo test --test integration -- --ignored --nocapture
//!
//! Set SERVICEWORKS_URL to target a QA deployment instead of production.

#[path = "integration/common.rs"]
mod common;
#[path = "integration/auth.rs"]
mod auth;
#[path = "integration/resources.rs"]
mod resources;
