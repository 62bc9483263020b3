//! Shared test helpers for webhook E2E tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use form_ingest_lib::api;
use form_ingest_lib::auth::WebhookSecret;
use form_ingest_lib::config::SIGNATURE_HEADER;
use form_ingest_lib::db::DbPool;
use form_ingest_lib::middleware::RequestLogger;
use form_ingest_lib::entity::{
    answer, checklist, deliverable, evaluation, processing_log, question, question_deliverable,
};
use form_ingest_lib::models::WebhookRequest;
use form_ingest_lib::services::WebhookProcessor;
use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait, QueryOrder};
use serde_json::{Value, json};

/// Secret shared with the simulated provider.
pub const TEST_SECRET: &str = "test-webhook-secret";

/// Fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same SQLite memory database.
pub async fn create_test_pool() -> DbPool {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    let pool = DbPool::from_connection(conn);
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn create_processor(pool: &DbPool) -> WebhookProcessor {
    WebhookProcessor::new(pool.clone(), WebhookSecret::new(TEST_SECRET))
}

/// Sign `body` with the test secret.
pub fn signature_for(body: &str) -> String {
    WebhookSecret::new(TEST_SECRET).header_for(body.as_bytes())
}

/// Request for `body` carrying a valid signature.
pub fn signed_request(body: &str) -> WebhookRequest {
    WebhookRequest::new(body).with_header(SIGNATURE_HEADER, signature_for(body))
}

/// Serialize and sign a JSON payload.
pub fn signed_json(payload: &Value) -> WebhookRequest {
    signed_request(&payload.to_string())
}

/// A complete submission: checklist variable, two questions, text and
/// boolean answers.
pub fn sample_payload(event_id: &str) -> Value {
    json!({
        "event_id": event_id,
        "event_type": "form_response",
        "form_response": {
            "form_id": "form-1",
            "submitted_at": "2024-01-15T10:30:00Z",
            "definition": {
                "fields": [
                    {"id": "q1", "title": "Name", "type": "short_text", "ref": "name"},
                    {"id": "q2", "title": "Agree?", "type": "yes_no", "ref": "agree"}
                ]
            },
            "answers": [
                {"type": "text", "text": "Alice", "field": {"id": "q1", "type": "short_text", "ref": "name"}},
                {"type": "boolean", "boolean": true, "field": {"id": "q2", "type": "yes_no", "ref": "agree"}}
            ],
            "variables": [
                {"key": "checklist", "type": "text", "text": "chk-1"}
            ]
        }
    })
}

/// Row counts of every table touched by ingestion.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub checklists: u64,
    pub evaluations: u64,
    pub deliverables: u64,
    pub questions: u64,
    pub associations: u64,
    pub answers: u64,
    pub logs: u64,
}

pub async fn row_counts(pool: &DbPool) -> RowCounts {
    let db = pool.connection();
    RowCounts {
        checklists: checklist::Entity::find().count(db).await.unwrap(),
        evaluations: evaluation::Entity::find().count(db).await.unwrap(),
        deliverables: deliverable::Entity::find().count(db).await.unwrap(),
        questions: question::Entity::find().count(db).await.unwrap(),
        associations: question_deliverable::Entity::find().count(db).await.unwrap(),
        answers: answer::Entity::find().count(db).await.unwrap(),
        logs: processing_log::Entity::find().count(db).await.unwrap(),
    }
}

/// Processing log rows in insertion order.
pub async fn processing_logs(pool: &DbPool) -> Vec<processing_log::Model> {
    processing_log::Entity::find()
        .order_by_asc(processing_log::Column::Id)
        .all(pool.connection())
        .await
        .unwrap()
}

/// Answer rows in insertion order.
pub async fn answers(pool: &DbPool) -> Vec<answer::Model> {
    answer::Entity::find()
        .order_by_asc(answer::Column::Id)
        .all(pool.connection())
        .await
        .unwrap()
}

/// Create the HTTP app with webhook and health routes.
pub async fn create_test_app(
    pool: DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let processor = create_processor(&pool);
    test::init_service(
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(processor))
            .service(
                web::scope("/api/v1")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_webhook_routes),
            ),
    )
    .await
}

/// Parse response body as JSON.
pub async fn body_json(resp: ServiceResponse) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
