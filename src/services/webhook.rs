//! Webhook orchestration: authenticate, parse, normalize, persist.
//!
//! Authentication and envelope errors are answered before any connection is
//! taken from the pool. Once the transaction is open every failure rolls it
//! back, leaves an `error` row in the processing log and yields a 500 carrying
//! the raw error message.

use actix_web::http::StatusCode;
use sea_orm::ConnectionTrait;
use serde_json::Value as JsonValue;
use tracing::{debug, error, info, warn};

use crate::auth::WebhookSecret;
use crate::config::{Config, SIGNATURE_HEADER};
use crate::db::{
    DbPool, answers, checklists, deliverables, evaluations, processing_logs, questions,
};
use crate::error::{PayloadError, ProcessingError, ProcessingResult};
use crate::models::{
    NormalizedSubmission, ProcessingStatus, WebhookRequest, WebhookResponse,
};
use crate::services::normalizer::{self, Envelope};

/// Response message for a stored submission.
pub const SUCCESS_MESSAGE: &str = "Submission processed and stored";

/// Message of the `received` processing log row.
pub const RECEIVED_LOG_MESSAGE: &str = "Submission received and stored successfully";

/// Handles webhook invocations. Cheap to clone; holds no per-request state.
#[derive(Clone, Debug)]
pub struct WebhookProcessor {
    pool: DbPool,
    secret: WebhookSecret,
}

impl WebhookProcessor {
    pub fn new(pool: DbPool, secret: WebhookSecret) -> Self {
        Self { pool, secret }
    }

    /// Build from the process configuration.
    pub fn from_config(pool: DbPool, config: &Config) -> Self {
        Self::new(pool, WebhookSecret::from(config.secret_token.clone()))
    }

    /// Process one invocation. Every outcome, including failures, is a response.
    pub async fn handle(&self, request: &WebhookRequest) -> WebhookResponse {
        let raw_body = match request.raw_body() {
            Ok(body) => body,
            Err(e) => {
                warn!("Rejected webhook with undecodable body: {}", e);
                return WebhookResponse::error(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        if let Err(e) = self
            .secret
            .verify(&raw_body, request.header(SIGNATURE_HEADER))
        {
            warn!(status = e.status_code().as_u16(), "Rejected webhook: {}", e);
            return WebhookResponse::error(e.status_code(), e.to_string());
        }

        let document: JsonValue = match serde_json::from_slice(&raw_body) {
            Ok(document) => document,
            Err(e) => {
                let e = PayloadError::from(e);
                warn!("Rejected webhook: {}", e);
                return WebhookResponse::error(StatusCode::BAD_REQUEST, e.to_string());
            }
        };
        debug!(payload = %document, "Payload received");

        let envelope = match Envelope::from_document(&document) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Rejected webhook: {}", e);
                return WebhookResponse::error(StatusCode::BAD_REQUEST, e.to_string());
            }
        };

        let event_id = envelope.event_id();
        info!(event_id = %event_id, "Processing submission");

        match self.persist(envelope).await {
            Ok(()) => {
                info!(event_id = %event_id, "Submission committed");
                WebhookResponse::ok(SUCCESS_MESSAGE)
            }
            Err(e) => {
                error!(event_id = %event_id, "Failed to process submission: {}", e);
                self.record_failure(&event_id, &e).await;
                WebhookResponse::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }

    /// Normalize and store inside one transaction.
    ///
    /// The transaction is owned by this scope: commit consumes it, and any
    /// early return drops it, which rolls back and releases the connection.
    async fn persist(&self, envelope: Envelope<'_>) -> ProcessingResult<()> {
        let txn = self.pool.begin().await?;

        let stored = match normalizer::normalize_envelope(envelope) {
            Ok(submission) => store_submission(&txn, &submission).await,
            Err(e) => Err(ProcessingError::from(e)),
        };

        match stored {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// Best-effort `error` row, written outside the rolled-back transaction.
    async fn record_failure(&self, event_id: &str, failure: &ProcessingError) {
        if let Err(e) = processing_logs::record_processing(
            self.pool.connection(),
            Some(event_id),
            ProcessingStatus::Error,
            &failure.to_string(),
        )
        .await
        {
            warn!(event_id = %event_id, "Could not record processing failure: {}", e);
        }
    }
}

/// Write every record of a submission, then the `received` log row.
///
/// Order matters for the foreign keys: checklist, evaluation, deliverable,
/// questions with their deliverable links, answers.
pub async fn store_submission<C>(db: &C, submission: &NormalizedSubmission) -> ProcessingResult<()>
where
    C: ConnectionTrait,
{
    let event_id = submission.event_id();

    if let Some(checklist_id) = submission.checklist_id.as_deref() {
        checklists::insert_checklist(db, checklist_id).await?;
    }

    if let Some(evaluation_id) = submission.evaluation_id.as_deref() {
        evaluations::insert_evaluation(db, evaluation_id, submission.checklist_id.as_deref())
            .await?;
    }

    deliverables::insert_deliverable(db, &submission.deliverable).await?;

    for question in &submission.questions {
        questions::ensure_question(db, question).await?;
        questions::associate_question(db, &question.id, event_id).await?;
    }

    for answer in &submission.answers {
        info!(
            question_id = ?answer.question_id,
            question_title = %submission.question_title(answer.question_id.as_deref()),
            value = ?answer.value,
            text = ?answer.text,
            "Processing answer"
        );
        answers::insert_answer(db, answer).await?;
    }

    processing_logs::record_processing(
        db,
        Some(event_id),
        ProcessingStatus::Received,
        RECEIVED_LOG_MESSAGE,
    )
    .await
}
