//! Shape of the `form_response` object delivered by the form provider.
//!
//! Only the parts the ingestion pipeline reads are modelled; unknown keys are
//! ignored. Answers keep every key besides `type` and `field` so that values of
//! types without dedicated handling can still be extracted by name.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

/// The `form_response` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormResponse {
    /// Form identifier; may arrive as a string or a number.
    #[serde(default)]
    pub form_id: Option<JsonValue>,
    /// ISO-8601 submission time, e.g. `2024-01-15T10:30:00Z`.
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub definition: Option<FormDefinition>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// The form definition embedded in a submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// One question of the form definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    #[serde(default, rename = "ref")]
    pub field_ref: Option<String>,
}

/// Reference from an answer back to its field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerField {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    #[serde(default, rename = "ref")]
    pub field_ref: Option<String>,
}

/// One captured answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(default)]
    pub field: AnswerField,
    #[serde(default, rename = "type")]
    pub answer_type: Option<String>,
    /// Remaining keys, e.g. `text`, `choice`, `number`, `boolean`, `email`.
    #[serde(flatten)]
    pub values: Map<String, JsonValue>,
}

impl SubmittedAnswer {
    /// Value stored under `key`, treating JSON `null` as absent.
    pub fn value(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key).filter(|v| !v.is_null())
    }
}

/// A custom variable attached to the submission (`key` plus a typed value).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variable {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(flatten)]
    pub values: Map<String, JsonValue>,
}
