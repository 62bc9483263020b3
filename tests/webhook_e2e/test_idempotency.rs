//! Redelivery of the same event.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_redelivery_does_not_duplicate_keyed_rows() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let request = signed_json(&sample_payload("evt-1"));

    let first = processor.handle(&request).await;
    let second = processor.handle(&request).await;

    assert_eq!(first.status_code(), 200);
    assert_eq!(second.status_code(), 200);

    // Answers and log rows have no natural key and are appended again.
    assert_eq!(
        row_counts(&pool).await,
        RowCounts {
            checklists: 1,
            evaluations: 1,
            deliverables: 1,
            questions: 2,
            associations: 2,
            answers: 4,
            logs: 2,
        }
    );
}

#[actix_rt::test]
async fn test_second_event_reuses_form_rows() {
    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    processor.handle(&signed_json(&sample_payload("evt-1"))).await;
    let mut payload = sample_payload("evt-2");
    payload["form_response"]["definition"]["fields"][0]["title"] = json!("Full name");
    let response = processor.handle(&signed_json(&payload)).await;

    assert_eq!(response.status_code(), 200);

    let counts = row_counts(&pool).await;
    assert_eq!(counts.checklists, 1);
    assert_eq!(counts.evaluations, 1);
    assert_eq!(counts.deliverables, 2);
    assert_eq!(counts.questions, 2);
    assert_eq!(counts.associations, 4);
}

#[actix_rt::test]
async fn test_existing_question_keeps_first_title() {
    use form_ingest_lib::entity::question;
    use sea_orm::EntityTrait;

    let pool = create_test_pool().await;
    let processor = create_processor(&pool);

    processor.handle(&signed_json(&sample_payload("evt-1"))).await;
    let mut payload = sample_payload("evt-2");
    payload["form_response"]["definition"]["fields"][0]["title"] = json!("Full name");
    processor.handle(&signed_json(&payload)).await;

    let stored = question::Entity::find_by_id(("q1".to_string(), "form-1".to_string()))
        .one(pool.connection())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.text, "Name");
}
