//! Projection of a submission payload onto the relational records.
//!
//! Pure functions: nothing here touches the database. The envelope check is
//! split from the full projection so the caller can reject payloads without
//! `event_id`/`form_response` before opening a transaction.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::PayloadError;
use crate::models::{
    AnswerRecord, DeliverableRecord, FormResponse, NormalizedSubmission, QuestionRecord,
    SubmittedAnswer,
};

/// Timestamp format the provider sends in `submitted_at`.
pub const PROVIDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Name of the custom variable carrying the checklist id.
pub const CHECKLIST_VARIABLE: &str = "checklist";

/// The two top-level members every payload must carry.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    pub event_id: &'a JsonValue,
    pub form_response: &'a JsonValue,
}

impl<'a> Envelope<'a> {
    /// Require non-empty `event_id` and `form_response`.
    pub fn from_document(document: &'a JsonValue) -> Result<Self, PayloadError> {
        let event_id = document
            .get("event_id")
            .filter(|v| is_present(v))
            .ok_or(PayloadError::MissingFields)?;
        let form_response = document
            .get("form_response")
            .filter(|v| is_present(v))
            .ok_or(PayloadError::MissingFields)?;

        Ok(Self {
            event_id,
            form_response,
        })
    }

    /// The event id as a string.
    pub fn event_id(&self) -> String {
        value_to_string(self.event_id)
    }
}

/// Parse and project a whole payload.
pub fn normalize(document: &JsonValue) -> Result<NormalizedSubmission, PayloadError> {
    normalize_envelope(Envelope::from_document(document)?)
}

/// Project an already-checked envelope.
pub fn normalize_envelope(envelope: Envelope<'_>) -> Result<NormalizedSubmission, PayloadError> {
    let event_id = envelope.event_id();
    let form: FormResponse = serde_json::from_value(envelope.form_response.clone())
        .map_err(|e| PayloadError::UnexpectedShape(format!("form_response: {}", e)))?;

    let checklist_id = extract_checklist_id(&form);
    let evaluation_id = form
        .form_id
        .as_ref()
        .filter(|v| !v.is_null())
        .map(value_to_string)
        .filter(|id| !id.is_empty());

    let submitted_at = match form.submitted_at.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_submitted_at(raw)?),
        _ => None,
    };

    let deliverable = DeliverableRecord {
        id: event_id.clone(),
        evaluation_id: evaluation_id.clone(),
        checklist_id: checklist_id.clone(),
        submitted_at,
        respondent_name: None,
        required_comment: None,
        optional_comment: None,
    };

    let (questions, question_titles) = build_questions(&form, evaluation_id.as_deref());

    let answers = form
        .answers
        .iter()
        .map(|answer| build_answer(answer, &event_id, evaluation_id.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        event_id = %event_id,
        questions = questions.len(),
        answers = answers.len(),
        "Submission normalized"
    );

    Ok(NormalizedSubmission {
        deliverable,
        evaluation_id,
        checklist_id,
        questions,
        answers,
        question_titles,
    })
}

/// Convert `YYYY-MM-DDTHH:MM:SSZ` into a timestamp.
pub fn parse_submitted_at(raw: &str) -> Result<NaiveDateTime, PayloadError> {
    NaiveDateTime::parse_from_str(raw, PROVIDER_TIMESTAMP_FORMAT).map_err(|source| {
        PayloadError::MalformedTimestamp {
            value: raw.to_string(),
            source,
        }
    })
}

/// First variable keyed `checklist`, read from its `text` value.
fn extract_checklist_id(form: &FormResponse) -> Option<String> {
    form.variables
        .iter()
        .find(|var| var.key.as_deref() == Some(CHECKLIST_VARIABLE))
        .and_then(|var| var.values.get("text"))
        .filter(|v| !v.is_null())
        .map(value_to_string)
        .filter(|id| !id.is_empty())
}

fn build_questions(
    form: &FormResponse,
    evaluation_id: Option<&str>,
) -> (Vec<QuestionRecord>, HashMap<String, String>) {
    let fields = form
        .definition
        .as_ref()
        .map(|d| d.fields.as_slice())
        .unwrap_or_default();

    let mut questions = Vec::with_capacity(fields.len());
    let mut titles = HashMap::with_capacity(fields.len());

    // Order is the position in the definition, counting skipped fields too.
    for (order, field) in (1..).zip(fields) {
        let Some(id) = field.id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };

        titles.insert(
            id.to_string(),
            field.title.as_deref().unwrap_or_default().to_lowercase(),
        );

        questions.push(QuestionRecord {
            id: id.to_string(),
            evaluation_id: evaluation_id.map(str::to_string),
            text: field.title.clone(),
            question_type: field.field_type.clone(),
            order,
            field_ref: field.field_ref.clone(),
        });
    }

    (questions, titles)
}

fn build_answer(
    answer: &SubmittedAnswer,
    deliverable_id: &str,
    evaluation_id: Option<&str>,
) -> Result<AnswerRecord, PayloadError> {
    let (value, text) = extract_answer_value(answer)?;

    Ok(AnswerRecord {
        deliverable_id: deliverable_id.to_string(),
        question_id: answer.field.id.clone(),
        evaluation_id: evaluation_id.map(str::to_string),
        value,
        text,
        answer_type: answer.answer_type.clone(),
        field_ref: answer.field.field_ref.clone(),
    })
}

/// Split an answer into its numeric and textual parts according to its type.
pub fn extract_answer_value(
    answer: &SubmittedAnswer,
) -> Result<(Option<f64>, Option<String>), PayloadError> {
    let answer_type = answer.answer_type.as_deref().unwrap_or_default();

    match answer_type {
        "text" => Ok((None, answer.value("text").map(value_to_string))),
        "choice" => {
            let label = answer
                .value("choice")
                .and_then(|choice| choice.get("label"))
                .filter(|label| !label.is_null())
                .map(value_to_string);
            Ok((None, label))
        }
        "number" => match answer.value("number") {
            None => Ok((None, None)),
            Some(JsonValue::Number(n)) => Ok((n.as_f64(), None)),
            Some(other) => Err(PayloadError::UnexpectedShape(format!(
                "number answer is not numeric: {}",
                other
            ))),
        },
        "boolean" => match answer.value("boolean") {
            Some(JsonValue::Bool(b)) => Ok((Some(if *b { 1.0 } else { 0.0 }), None)),
            Some(JsonValue::Number(n)) => Ok((n.as_f64().map(f64::trunc), None)),
            _ => Err(PayloadError::AnswerExtraction {
                answer_type: "boolean".to_string(),
            }),
        },
        // Key presence decides; a stored `null` is kept as its JSON text.
        other => answer
            .values
            .get(other)
            .map(|v| (None, Some(value_to_string(v))))
            .ok_or_else(|| PayloadError::AnswerExtraction {
                answer_type: other.to_string(),
            }),
    }
}

/// Strings are taken verbatim; everything else uses its JSON rendering.
pub fn value_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness for required members: null, `false`, zero, empty strings,
/// empty objects and empty arrays do not count.
fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Object(map) => !map.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        _ => true,
    }
}
