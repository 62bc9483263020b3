//! SeaORM entity definitions for the submission schema.
//!
//! Table and column names follow the existing database; Rust field names are
//! in English.

pub mod answer;
pub mod checklist;
pub mod deliverable;
pub mod evaluation;
pub mod processing_log;
pub mod question;
pub mod question_deliverable;
