//! Failures after the transaction opens leave only an error log row.

use serde_json::json;

use super::test_helpers::*;

fn payload_with_long_third_question() -> serde_json::Value {
    let mut payload = sample_payload("evt-fail");
    payload["form_response"]["definition"]["fields"] = json!([
        {"id": "q1", "title": "Name", "type": "short_text"},
        {"id": "q2", "title": "Agree?", "type": "yes_no"},
        {"id": "x".repeat(51), "title": "Too long", "type": "short_text"}
    ]);
    payload
}

#[actix_rt::test]
async fn test_failing_question_rolls_back_everything() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    let response = processor
        .handle(&signed_json(&payload_with_long_third_question()))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.error_message(),
        Some("id_pergunta exceeds the maximum length of 50 characters (got 51)")
    );
    assert_eq!(
        row_counts(&pool).await,
        RowCounts {
            logs: 1,
            ..Default::default()
        }
    );

    let logs = processing_logs(&pool).await;
    assert_eq!(logs[0].status, "error");
    assert_eq!(logs[0].deliverable_id.as_deref(), Some("evt-fail"));
    assert_eq!(logs[0].message.as_deref(), response.error_message());
}

#[actix_rt::test]
async fn test_malformed_timestamp_fails_whole_submission() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let mut payload = sample_payload("evt-ts");
    payload["form_response"]["submitted_at"] = json!("15/01/2024 10:30");

    let response = processor.handle(&signed_json(&payload)).await;

    assert_eq!(response.status_code(), 500);
    let counts = row_counts(&pool).await;
    assert_eq!(counts.deliverables, 0);
    assert_eq!(counts.logs, 1);
    assert_eq!(processing_logs(&pool).await[0].status, "error");
}

#[actix_rt::test]
async fn test_unextractable_answer_fails_whole_submission() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let mut payload = sample_payload("evt-ans");
    payload["form_response"]["answers"] = json!([
        {"type": "text", "text": "Alice", "field": {"id": "q1"}},
        {"type": "email", "field": {"id": "q2"}}
    ]);

    let response = processor.handle(&signed_json(&payload)).await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.error_message(),
        Some("Cannot extract answer of type 'email': key 'email' is missing")
    );
    assert_eq!(
        row_counts(&pool).await,
        RowCounts {
            logs: 1,
            ..Default::default()
        }
    );
}

#[actix_rt::test]
async fn test_store_succeeds_after_earlier_rollback() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    processor
        .handle(&signed_json(&payload_with_long_third_question()))
        .await;
    let response = processor.handle(&signed_json(&sample_payload("evt-ok"))).await;

    assert_eq!(response.status_code(), 200);
    let logs = processing_logs(&pool).await;
    let statuses: Vec<_> = logs.iter().map(|l| l.status.as_str()).collect();
    assert_eq!(statuses, ["error", "received"]);
}
