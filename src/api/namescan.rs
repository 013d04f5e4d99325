//! REST API endpoint for the quick name presence scan

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use url::Url;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::namescan::NameScanOutcome;
use crate::service::NameScanner;

/// Request body for a name scan
#[derive(Debug, Deserialize, ToSchema)]
pub struct NameScanRequest {
    /// Page to fetch and scan
    pub url: Url,
    /// Name to look for in the page's visible text
    pub name: String,
}

/// Scan a page's visible text for a name
#[utoipa::path(
    post,
    path = "/v1/namescan",
    request_body = NameScanRequest,
    responses(
        (status = 200, description = "Scan completed", body = NameScanOutcome),
        (status = 400, description = "Empty name", body = crate::api::error::ErrorResponse),
        (status = 403, description = "URL refused by scan policy", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Page fetch failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "namescan"
)]
#[post("/v1/namescan")]
pub async fn scan_name(
    scanner: web::Data<NameScanner>,
    request: web::Json<NameScanRequest>,
) -> Result<impl Responder, ApiError> {
    let request = request.into_inner();

    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let outcome = scanner.scan(&request.url, name).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// Configure name scan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scan_name);
}
