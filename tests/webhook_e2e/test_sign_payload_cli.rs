//! The `sign-payload` binary produces headers the server accepts.

use std::io::Write;
use std::process::Command;

use form_ingest_lib::models::WebhookRequest;

use super::test_helpers::*;

fn run_sign_payload(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_sign-payload"))
        .args(args)
        .env_remove("SECRET_TOKEN")
        .output()
        .expect("Failed to run sign-payload");
    assert!(output.status.success(), "sign-payload failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[actix_rt::test]
async fn test_cli_signature_is_accepted() {
    let body = sample_payload("evt-cli").to_string();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap();

    let header = run_sign_payload(&["--secret", TEST_SECRET, "--file", path, "--value-only"]);
    assert_eq!(header, signature_for(&body));

    let pool = create_test_pool().await;
    let processor = create_processor(&pool);
    let request = WebhookRequest::new(body).with_header("Typeform-Signature", header);

    assert_eq!(processor.handle(&request).await.status_code(), 200);
}

#[test]
fn test_cli_prints_header_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello").unwrap();
    let path = file.path().to_str().unwrap();

    let line = run_sign_payload(&["-s", "key", "-f", path]);

    assert_eq!(
        line,
        "Typeform-Signature: sha256=kwezuRXvtRcf8U2MtV+8x5jGwO8UVtZt7RpqpyOli3s="
    );
}
