//! Domain error types for the form ingestion server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Signature verification failures. These never reach persistence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Header absent or empty
    #[error("Missing signature")]
    MissingSignature,

    /// Header has no `=` between algorithm and signature
    #[error("Invalid Typeform-Signature header")]
    MalformedHeader,

    /// Algorithm token other than `sha256`
    #[error("Unsupported signature algorithm '{0}'. Only sha256 is allowed")]
    UnsupportedAlgorithm(String),

    /// Computed digest differs from the provided one
    #[error("Invalid signature")]
    InvalidSignature,
}

impl AuthError {
    /// HTTP status reported to the provider.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingSignature => StatusCode::FORBIDDEN,
            AuthError::MalformedHeader => StatusCode::BAD_REQUEST,
            AuthError::UnsupportedAlgorithm(_) => StatusCode::NOT_IMPLEMENTED,
            AuthError::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Problems with the submission body itself.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Invalid body encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("Invalid payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing fields: event_id, form_response")]
    MissingFields,

    #[error("Malformed submitted_at '{value}': {source}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot extract answer of type '{answer_type}': key '{answer_type}' is missing")]
    AnswerExtraction { answer_type: String },

    #[error("Unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Field rejected before an insert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} exceeds the maximum length of {max_length} characters (got {actual_length})")]
    TooLong {
        field: &'static str,
        max_length: usize,
        actual_length: usize,
    },

    #[error("{field} is required")]
    Missing { field: &'static str },
}

/// Any failure once the transaction is open. Always reported as 500.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Persistence(#[from] sea_orm::DbErr),
}

/// Convenience type alias for the ingestion pipeline.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Application-level errors for non-webhook endpoints and startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// A dependency the endpoint needs is not reachable
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code, response_message) = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Unavailable(err_str) => {
                tracing::warn!("Service unavailable: {}", err_str);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "NOT_READY",
                    "Database connection failed".to_string(),
                )
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_code.to_string(),
            message: response_message,
        })
    }
}

/// Error response body for non-webhook endpoints.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}
