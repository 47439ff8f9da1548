//! Prometheus metrics for post-service.
//!
//! Collectors live in `posts`; `serve_metrics` renders the default registry.

use actix_web::HttpResponse;
use prometheus::{Encoder, TextEncoder};

pub mod posts;

pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();

    match encoder.encode(&prometheus::gather(), &mut buffer) {
        Ok(()) => HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer),
        Err(err) => {
            tracing::error!("metrics encoding failed: {}", err);
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}
