//! Flat records produced from one submission, one per target table.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Storage format of `entregaveis.data_recebimento`.
pub const STORAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text stored for questions whose title is blank.
pub const UNSPECIFIED_QUESTION_TEXT: &str = "Pergunta não especificada";

/// One delivery of a submission (row of `entregaveis`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliverableRecord {
    /// Provider event id
    pub id: String,
    pub evaluation_id: Option<String>,
    pub checklist_id: Option<String>,
    pub submitted_at: Option<NaiveDateTime>,
    pub respondent_name: Option<String>,
    pub required_comment: Option<String>,
    pub optional_comment: Option<String>,
}

impl DeliverableRecord {
    /// Submission time rendered as stored, e.g. `2024-01-15 10:30:00`.
    pub fn submitted_at_display(&self) -> Option<String> {
        self.submitted_at
            .map(|ts| ts.format(STORAGE_TIMESTAMP_FORMAT).to_string())
    }
}

/// A question of the form definition (row of `perguntas`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub id: String,
    pub evaluation_id: Option<String>,
    pub text: Option<String>,
    pub question_type: Option<String>,
    /// 1-based position of the field in the form definition.
    pub order: i32,
    pub field_ref: Option<String>,
}

impl QuestionRecord {
    /// Text to persist, falling back to a placeholder when the title is blank.
    pub fn text_or_placeholder(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => UNSPECIFIED_QUESTION_TEXT,
        }
    }
}

/// A captured answer (row of `respostas`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    pub deliverable_id: String,
    pub question_id: Option<String>,
    pub evaluation_id: Option<String>,
    pub value: Option<f64>,
    pub text: Option<String>,
    pub answer_type: Option<String>,
    pub field_ref: Option<String>,
}

/// Everything extracted from one webhook payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSubmission {
    pub deliverable: DeliverableRecord,
    pub evaluation_id: Option<String>,
    pub checklist_id: Option<String>,
    /// In form-definition order.
    pub questions: Vec<QuestionRecord>,
    pub answers: Vec<AnswerRecord>,
    /// Question id to lower-cased title, used when logging answers.
    pub question_titles: HashMap<String, String>,
}

impl NormalizedSubmission {
    pub fn event_id(&self) -> &str {
        &self.deliverable.id
    }

    /// Lower-cased title of a question, or an empty string if unknown.
    pub fn question_title(&self, question_id: Option<&str>) -> &str {
        question_id
            .and_then(|id| self.question_titles.get(id))
            .map(String::as_str)
            .unwrap_or("")
    }
}
