//! Business logic services.

pub mod normalizer;
pub mod webhook;

pub use webhook::WebhookProcessor;
