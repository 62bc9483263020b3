//! Signature failures are answered before anything is stored.

use form_ingest_lib::config::SIGNATURE_HEADER;
use form_ingest_lib::models::WebhookRequest;

use super::test_helpers::*;

async fn assert_rejected(request: WebhookRequest, status: u16, message: &str) {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    let response = processor.handle(&request).await;

    assert_eq!(response.status_code(), status);
    assert_eq!(response.error_message(), Some(message));
    assert_eq!(row_counts(&pool).await, RowCounts::default());
}

#[actix_rt::test]
async fn test_missing_signature_returns_403() {
    let body = sample_payload("evt-1").to_string();

    assert_rejected(WebhookRequest::new(body), 403, "Missing signature").await;
}

#[actix_rt::test]
async fn test_empty_signature_returns_403() {
    let body = sample_payload("evt-1").to_string();
    let request = WebhookRequest::new(body).with_header(SIGNATURE_HEADER, "");

    assert_rejected(request, 403, "Missing signature").await;
}

#[actix_rt::test]
async fn test_header_without_separator_returns_400() {
    let body = sample_payload("evt-1").to_string();
    let request = WebhookRequest::new(body).with_header(SIGNATURE_HEADER, "sha256");

    assert_rejected(request, 400, "Invalid Typeform-Signature header").await;
}

#[actix_rt::test]
async fn test_other_algorithm_returns_501() {
    let body = sample_payload("evt-1").to_string();
    let request = WebhookRequest::new(body).with_header(SIGNATURE_HEADER, "md5=abc");

    assert_rejected(
        request,
        501,
        "Unsupported signature algorithm 'md5'. Only sha256 is allowed",
    )
    .await;
}

#[actix_rt::test]
async fn test_wrong_signature_returns_401() {
    let body = sample_payload("evt-1").to_string();
    let request = WebhookRequest::new(body).with_header(SIGNATURE_HEADER, "sha256=AAAA");

    assert_rejected(request, 401, "Invalid signature").await;
}

#[actix_rt::test]
async fn test_signature_over_different_body_returns_401() {
    let signed = sample_payload("evt-1").to_string();
    let sent = sample_payload("evt-2").to_string();
    let request = WebhookRequest::new(sent).with_header(SIGNATURE_HEADER, signature_for(&signed));

    assert_rejected(request, 401, "Invalid signature").await;
}

#[actix_rt::test]
async fn test_lowercase_header_name_is_accepted() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let body = sample_payload("evt-1").to_string();
    let request =
        WebhookRequest::new(body.clone()).with_header("typeform-signature", signature_for(&body));

    let response = processor.handle(&request).await;

    assert_eq!(response.status_code(), 200);
}
