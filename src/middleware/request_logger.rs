//! Request logging middleware.
//!
//! One line when a request arrives (method, path, peer, whether a webhook
//! signature header was sent) and one when it completes, at a level chosen by
//! the response class.

use std::future::{Ready, ready};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::config::SIGNATURE_HEADER;

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let route = format!("{} {}", req.method(), req.path());
        let peer = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
        let signed = req.headers().contains_key(SIGNATURE_HEADER);

        info!(target: "api", route = %route, peer = %peer, signed, "→ Request received");

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            log_completion(&route, res.status(), started.elapsed().as_millis() as u64);
            Ok(res)
        })
    }
}

fn log_completion(route: &str, status: StatusCode, duration_ms: u64) {
    let status_code = status.as_u16();
    if status.is_server_error() {
        error!(target: "api", route = %route, status = status_code, duration_ms, "← Request failed");
    } else if status.is_client_error() {
        warn!(target: "api", route = %route, status = status_code, duration_ms, "← Request rejected");
    } else {
        info!(target: "api", route = %route, status = status_code, duration_ms, "← Request completed");
    }
}
