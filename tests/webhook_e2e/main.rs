//! End-to-end tests for webhook ingestion against an in-memory SQLite schema.
//!
//! Each test gets its own database, so tests can run in parallel.

mod test_helpers;

mod test_auth;
mod test_idempotency;
mod test_payload;
mod test_rollback;
mod test_routes;
mod test_sign_payload_cli;
