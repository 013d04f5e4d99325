pub mod error;
pub mod health;
pub mod namescan;
pub mod openapi;
pub mod results;
pub mod screening;

pub use error::ApiError;


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::Value;

    use super::test_support::StubBackend;
    use crate::fixtures;
    use crate::model::config::NameScanPolicy;
    use crate::model::report::ScreeningResult;
    use crate::service::{NameScanner, ScreeningBackend};

    fn backend_data(stub: &Arc<StubBackend>) -> web::Data<dyn ScreeningBackend> {
        web::Data::from(Arc::clone(stub) as Arc<dyn ScreeningBackend>)
    }

    #[actix_web::test]
    async fn test_screen_rejects_invalid_submission_before_any_upstream_call() {
        let stub = Arc::new(StubBackend::new());
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::screening::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/screen")
            .set_json(serde_json::json!({
                "url": "not-a-url",
                "first_name": "",
                "last_name": "Doe"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stub.screen_calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_screen_accepts_submission_without_full_birth_date() {
        let stub = Arc::new(StubBackend::with_screen_response(
            fixtures::matched_result(),
        ));
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::screening::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/screen")
            .set_json(serde_json::json!({
                "url": "https://news.example.com/story",
                "first_name": "Jane",
                "last_name": "Doe",
                "birth_year": 1990
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(stub.screen_calls.load(Ordering::SeqCst), 1);

        let result: ScreeningResult = test::read_body_json(resp).await;
        assert!(result.matching.primary_match.is_some());
    }

    #[actix_web::test]
    async fn test_missing_result_and_unreachable_service_are_distinct() {
        let stub = Arc::new(StubBackend::with_stored("abc", fixtures::matched_result()));
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::results::configure),
        )
        .await;

        let found = test::TestRequest::get()
            .uri("/v1/results/abc")
            .to_request();
        assert_eq!(test::call_service(&app, found).await.status(), StatusCode::OK);

        let missing = test::TestRequest::get()
            .uri("/v1/results/nope")
            .to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "result_not_found");

        let down = Arc::new(StubBackend::unreachable());
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&down))
                .configure(super::results::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/v1/results/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "upstream_unreachable");
    }

    #[actix_web::test]
    async fn test_stored_result_report_renders_sections() {
        let stub = Arc::new(StubBackend::with_stored("abc", fixtures::matched_result()));
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::results::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/results/abc/report?expand=all&raw=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let sections = body["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0]["id"], "article");
        assert!(sections[0]["detail"].is_object());
        assert!(body["raw_json"].is_string());
    }

    #[actix_web::test]
    async fn test_render_report_for_supplied_result() {
        let app = test::init_service(App::new().configure(super::screening::configure)).await;

        let req = test::TestRequest::post()
            .uri("/v1/report?expand=match")
            .set_json(fixtures::unmatched_result())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let match_section = &body["sections"][1];
        assert_eq!(match_section["id"], "match");
        assert_eq!(match_section["badges"][0]["label"], "No Match");
        assert!(match_section["detail"].is_object());
        assert!(body["raw_json"].is_null());
    }

    #[actix_web::test]
    async fn test_unknown_mock_fixture_maps_to_404() {
        let stub = Arc::new(StubBackend::new());
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::screening::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/mock-result?example=nope")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_relays_upstream_payload() {
        let stub = Arc::new(StubBackend::new());
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::health::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_health_reports_unreachable_target() {
        let stub = Arc::new(StubBackend::unreachable());
        let app = test::init_service(
            App::new()
                .app_data(backend_data(&stub))
                .configure(super::health::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to reach screening service");
        assert_eq!(body["target"], "http://screening.test:5001/");
    }

    #[actix_web::test]
    async fn test_namescan_rejects_empty_name() {
        let scanner = web::Data::new(NameScanner::new(NameScanPolicy::default()));
        let app = test::init_service(
            App::new()
                .app_data(scanner)
                .configure(super::namescan::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/namescan")
            .set_json(serde_json::json!({
                "url": "https://news.example.com/story",
                "name": "   "
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_namescan_blocked_host_yields_403() {
        let scanner = web::Data::new(NameScanner::new(NameScanPolicy {
            allow: vec![],
            deny: vec!["blocked.example.com".to_string()],
        }));
        let app = test::init_service(
            App::new()
                .app_data(scanner)
                .configure(super::namescan::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/namescan")
            .set_json(serde_json::json!({
                "url": "https://blocked.example.com/story",
                "name": "Jane Doe"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "scan_blocked");
    }
}
