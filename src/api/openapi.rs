//! Machine-readable documentation for the gateway surface

use actix_web::{get, web, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::screening::ApiDoc;

/// The gateway API as an OpenAPI 3 document, JSON form
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// The same document, YAML form
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_the_gateway_surface() {
        let doc = ApiDoc::openapi();

        for path in [
            "/health",
            "/v1/screen",
            "/v1/results",
            "/v1/results/{id}",
            "/v1/results/{id}/report",
            "/v1/report",
            "/v1/mock-result",
            "/v1/namescan",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing from document");
        }
    }

    #[test]
    fn test_yaml_rendering_succeeds() {
        let yaml = ApiDoc::openapi().to_yaml().unwrap();
        assert!(yaml.contains("Adverse Media Screening Gateway"));
    }
}
