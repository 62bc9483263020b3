//! Transport-neutral webhook invocation and its response.

use std::borrow::Cow;
use std::collections::HashMap;

use actix_web::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;

use crate::error::PayloadError;

/// One webhook invocation as handed over by the hosting runtime.
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    /// Header names are matched case-insensitively.
    pub headers: HashMap<String, String>,
    /// Request body, base64-encoded when `is_base64_encoded` is set.
    pub body: String,
    pub is_base64_encoded: bool,
}

impl WebhookRequest {
    /// Request with a plain-text body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            headers: HashMap::new(),
            body: body.into(),
            is_base64_encoded: false,
        }
    }

    /// Request carrying arbitrary bytes, base64-encoded for transport.
    pub fn from_bytes(body: &[u8]) -> Self {
        match std::str::from_utf8(body) {
            Ok(text) => Self::new(text),
            Err(_) => Self {
                headers: HashMap::new(),
                body: BASE64.encode(body),
                is_base64_encoded: true,
            },
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The exact bytes the provider signed.
    pub fn raw_body(&self) -> Result<Cow<'_, [u8]>, PayloadError> {
        if self.is_base64_encoded {
            Ok(Cow::Owned(BASE64.decode(self.body.as_bytes())?))
        } else {
            Ok(Cow::Borrowed(self.body.as_bytes()))
        }
    }
}

/// JSON body of every webhook response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Message { message: String },
    Error { error: String },
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl WebhookResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ResponseBody::Message {
                message: message.into(),
            },
        }
    }

    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: error.into(),
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// The error text, if this is an error response.
    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Error { error } => Some(error),
            ResponseBody::Message { .. } => None,
        }
    }
}
