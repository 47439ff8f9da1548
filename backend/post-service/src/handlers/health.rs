/// Health endpoints for container orchestration
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const STORE_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Serialize, Clone)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ComponentCheck {
    status: ComponentStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    checks: HashMap<String, ComponentCheck>,
    timestamp: String,
}

pub async fn health_summary() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "post-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ready once the store lock can be taken within `STORE_CHECK_TIMEOUT`.
pub async fn readiness_summary(service: web::Data<PostService>) -> HttpResponse {
    let start = Instant::now();
    let result = tokio::time::timeout(STORE_CHECK_TIMEOUT, service.store().len()).await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let (ready, store_check) = match result {
        Ok(count) => (
            true,
            ComponentCheck {
                status: ComponentStatus::Healthy,
                message: format!("{} posts in memory", count),
                latency_ms,
            },
        ),
        Err(_) => (
            false,
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: "post store lock not acquired in time".to_string(),
                latency_ms,
            },
        ),
    };

    let mut checks = HashMap::new();
    checks.insert("store".to_string(), store_check);

    let response = ReadinessResponse {
        ready,
        status: if ready {
            ComponentStatus::Healthy
        } else {
            ComponentStatus::Unhealthy
        },
        checks,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
