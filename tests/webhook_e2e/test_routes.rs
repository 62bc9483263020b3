//! HTTP surface: routing, raw body handling, health endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use form_ingest_lib::config::SIGNATURE_HEADER;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_post_webhook_stores_submission() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool.clone()).await;
    let body = sample_payload("evt-http").to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/webhooks/typeform")
        .insert_header(("content-type", "application/json"))
        .insert_header((SIGNATURE_HEADER, signature_for(&body)))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["message"].is_string());
    assert_eq!(row_counts(&pool).await.deliverables, 1);
}

#[actix_rt::test]
async fn test_post_webhook_without_signature_is_forbidden() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool.clone()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/webhooks/typeform")
        .set_payload(sample_payload("evt-http").to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Missing signature");
}

#[actix_rt::test]
async fn test_reformatted_body_fails_verification() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool.clone()).await;
    let payload = sample_payload("evt-http");
    let compact = payload.to_string();
    let pretty = serde_json::to_string_pretty(&payload).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/webhooks/typeform")
        .insert_header((SIGNATURE_HEADER, signature_for(&compact)))
        .set_payload(pretty)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_health_and_ready() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "healthy");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["database"], "connected");
}

#[actix_rt::test]
async fn test_unknown_route_passes_through_logger() {
    let pool = create_test_pool().await;
    let app = create_test_app(pool).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/unknown").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
