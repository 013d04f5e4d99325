//! REST API endpoints for stored screening results

use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::report::{build_report, SectionState};
use crate::service::ScreeningBackend;

/// Query parameters controlling report rendering
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportParams {
    /// Sections to expand: "all" or a comma-separated list of section ids
    /// (article, match, sentiment, credibility). Default: all collapsed.
    pub expand: Option<String>,
    /// Include the pretty-printed raw result JSON (default: false)
    pub raw: Option<bool>,
}

/// Translate report query parameters into section state
pub(crate) fn report_state(params: &ReportParams) -> SectionState {
    let mut state = SectionState::new();

    match params.expand.as_deref() {
        Some("all") => state.expand_all(),
        Some(list) => {
            for token in list.split(',') {
                let token = token.trim();
                if !token.is_empty() && !state.is_expanded(token) {
                    state.toggle(token);
                }
            }
        }
        None => {}
    }

    state.set_show_raw_json(params.raw.unwrap_or(false));
    state
}

/// List stored screening results
#[utoipa::path(
    get,
    path = "/v1/results",
    responses(
        (status = 200, description = "Result index retrieved", body = [crate::model::report::ResultSummary]),
        (status = 502, description = "Screening service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "results"
)]
#[get("/v1/results")]
pub async fn list_results(
    backend: web::Data<dyn ScreeningBackend>,
) -> Result<impl Responder, ApiError> {
    let summaries = backend.list_results().await?;
    Ok(HttpResponse::Ok().json(summaries))
}

/// Get a stored screening result by ID
#[utoipa::path(
    get,
    path = "/v1/results/{id}",
    params(
        ("id" = String, Path, description = "Stored result ID")
    ),
    responses(
        (status = 200, description = "Result retrieved", body = crate::model::report::ScreeningResult),
        (status = 404, description = "No result with this ID", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Screening service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "results"
)]
#[get("/v1/results/{id}")]
pub async fn get_result(
    backend: web::Data<dyn ScreeningBackend>,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();
    let result = backend.get_result(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Render a stored screening result as a sectioned report
#[utoipa::path(
    get,
    path = "/v1/results/{id}/report",
    params(
        ("id" = String, Path, description = "Stored result ID"),
        ReportParams
    ),
    responses(
        (status = 200, description = "Report rendered", body = crate::report::ReportView),
        (status = 404, description = "No result with this ID", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Screening service failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "results"
)]
#[get("/v1/results/{id}/report")]
pub async fn result_report(
    backend: web::Data<dyn ScreeningBackend>,
    path: web::Path<String>,
    query: web::Query<ReportParams>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner();
    let result = backend.get_result(&id).await?;

    let state = report_state(&query);
    Ok(HttpResponse::Ok().json(build_report(&result, &state)))
}

/// Configure stored-result routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_results)
        .service(get_result)
        .service(result_report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::KNOWN_SECTIONS;

    #[test]
    fn test_report_state_default_is_collapsed() {
        let state = report_state(&ReportParams::default());
        for id in KNOWN_SECTIONS {
            assert!(!state.is_expanded(id));
        }
        assert!(!state.show_raw_json());
    }

    #[test]
    fn test_report_state_expand_all() {
        let params = ReportParams {
            expand: Some("all".to_string()),
            raw: None,
        };

        let state = report_state(&params);
        for id in KNOWN_SECTIONS {
            assert!(state.is_expanded(id));
        }
    }

    #[test]
    fn test_report_state_expand_list() {
        let params = ReportParams {
            expand: Some("match, sentiment".to_string()),
            raw: Some(true),
        };

        let state = report_state(&params);
        assert!(state.is_expanded("match"));
        assert!(state.is_expanded("sentiment"));
        assert!(!state.is_expanded("article"));
        assert!(state.show_raw_json());
    }

    #[test]
    fn test_report_state_ignores_repeated_tokens() {
        let params = ReportParams {
            expand: Some("match,match,,match".to_string()),
            raw: None,
        };

        // A repeated token must not toggle the section back to collapsed
        let state = report_state(&params);
        assert!(state.is_expanded("match"));
    }
}
