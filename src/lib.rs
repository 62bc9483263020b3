//! Form ingestion server library.
//!
//! Receives signed form-submission webhooks, verifies their HMAC signature and
//! stores the submission as checklist, evaluation, deliverable, question and
//! answer rows inside a single transaction.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
