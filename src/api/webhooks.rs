//! Webhook endpoint for form submissions.

use actix_web::{HttpRequest, HttpResponse, post, web};

use crate::models::WebhookRequest;
use crate::services::WebhookProcessor;

/// Receive a signed submission.
///
/// The body is taken as raw bytes so the signature is checked against exactly
/// what the provider sent. Status and JSON body come from the processor.
#[post("/webhooks/typeform")]
pub async fn receive_submission(
    req: HttpRequest,
    body: web::Bytes,
    processor: web::Data<WebhookProcessor>,
) -> HttpResponse {
    let mut request = WebhookRequest::from_bytes(&body);
    for (name, value) in req.headers() {
        if let Ok(value) = value.to_str() {
            request
                .headers
                .insert(name.as_str().to_string(), value.to_string());
        }
    }

    let response = processor.handle(&request).await;
    HttpResponse::build(response.status).json(response.body)
}

/// Configure webhook routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(receive_submission);
}
