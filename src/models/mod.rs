//! Domain models for the form ingestion server.

pub mod records;
pub mod status;
pub mod submission;
pub mod webhook;

// Re-export commonly used types
pub use records::{AnswerRecord, DeliverableRecord, NormalizedSubmission, QuestionRecord};
pub use status::{EvaluationStatus, ProcessingStatus};
pub use submission::{
    AnswerField, FieldDefinition, FormDefinition, FormResponse, SubmittedAnswer, Variable,
};
pub use webhook::{ResponseBody, WebhookRequest, WebhookResponse};
