//! Health endpoint relaying the screening service's own health payload

use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};

use crate::service::ScreeningBackend;

/// Gateway health check
///
/// Proxies the screening service's health endpoint and relays its payload
/// and status verbatim, so one probe covers the whole chain. If the service
/// cannot be reached at all, responds 502 with the configured target.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Screening service is healthy"),
        (status = 502, description = "Screening service unreachable or unhealthy")
    ),
    tag = "health"
)]
#[get("/health")]
pub async fn health(backend: web::Data<dyn ScreeningBackend>) -> impl Responder {
    match backend.health().await {
        Ok(upstream) => {
            let status =
                StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(upstream.body)
        }
        Err(e) => {
            tracing::error!(error = %e, target = %backend.target(), "Screening service health check failed");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Failed to reach screening service",
                "target": backend.target().to_string()
            }))
        }
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
