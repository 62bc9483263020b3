//! Body problems detected before the transaction opens.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use form_ingest_lib::config::SIGNATURE_HEADER;
use form_ingest_lib::models::WebhookRequest;
use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_signed_invalid_json_returns_400() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    let response = processor.handle(&signed_request("{not json")).await;

    assert_eq!(response.status_code(), 400);
    assert!(
        response
            .error_message()
            .is_some_and(|m| m.starts_with("Invalid payload"))
    );
    assert_eq!(row_counts(&pool).await, RowCounts::default());
}

#[actix_rt::test]
async fn test_missing_event_id_returns_400_without_log() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let payload = json!({"form_response": {"form_id": "form-1"}});

    let response = processor.handle(&signed_json(&payload)).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.error_message(),
        Some("Missing fields: event_id, form_response")
    );
    assert_eq!(row_counts(&pool).await, RowCounts::default());
}

#[actix_rt::test]
async fn test_empty_form_response_returns_400() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let payload = json!({"event_id": "evt-1", "form_response": {}});

    let response = processor.handle(&signed_json(&payload)).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(row_counts(&pool).await, RowCounts::default());
}

#[actix_rt::test]
async fn test_base64_body_is_verified_on_decoded_bytes() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let body = sample_payload("evt-b64").to_string();
    let request = WebhookRequest {
        body: BASE64.encode(body.as_bytes()),
        is_base64_encoded: true,
        ..Default::default()
    }
    .with_header(SIGNATURE_HEADER, signature_for(&body));

    let response = processor.handle(&request).await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(row_counts(&pool).await.deliverables, 1);
}

#[actix_rt::test]
async fn test_undecodable_base64_body_returns_400() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let request = WebhookRequest {
        body: "%%%".to_string(),
        is_base64_encoded: true,
        ..Default::default()
    }
    .with_header(SIGNATURE_HEADER, "sha256=AAAA");

    let response = processor.handle(&request).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(row_counts(&pool).await, RowCounts::default());
}
