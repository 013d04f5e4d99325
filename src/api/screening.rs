//! REST API endpoints for screening submission and report rendering

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use crate::api::error::ApiError;
use crate::api::results::{report_state, ReportParams};
use crate::model::form::ScreeningSubmission;
use crate::model::report::ScreeningResult;
use crate::report::build_report;
use crate::service::ScreeningBackend;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adverse Media Screening Gateway",
        description = "HTTP gateway in front of the AI adverse-media screening service: \
                       validates submissions, relays results and renders sectioned reports."
    ),
    paths(
        crate::api::health::health,
        crate::api::screening::screen,
        crate::api::screening::mock_result,
        crate::api::screening::render_report,
        crate::api::results::list_results,
        crate::api::results::get_result,
        crate::api::results::result_report,
        crate::api::namescan::scan_name,
    ),
    components(schemas(
        crate::api::error::ErrorResponse,
        crate::api::namescan::NameScanRequest,
        crate::model::form::ScreeningSubmission,
        crate::model::report::ScreeningResult,
        crate::model::report::ResultSummary,
        crate::report::ReportView,
        crate::service::namescan::NameScanOutcome,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "screening", description = "Screening submission and report rendering"),
        (name = "results", description = "Stored screening results"),
        (name = "namescan", description = "Quick name presence scan")
    )
)]
pub struct ApiDoc;

/// Query parameters for the mock result endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct MockParams {
    /// Named fixture to return; the default fixture when omitted
    pub example: Option<String>,
}

/// Submit an article and person for adverse-media screening
///
/// The submission is validated before anything goes on the wire; an invalid
/// submission never reaches the screening service.
#[utoipa::path(
    post,
    path = "/v1/screen",
    request_body = ScreeningSubmission,
    responses(
        (status = 200, description = "Screening completed", body = ScreeningResult),
        (status = 400, description = "Submission failed validation", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Screening service unreachable or failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "screening"
)]
#[post("/v1/screen")]
pub async fn screen(
    backend: web::Data<dyn ScreeningBackend>,
    submission: web::Json<ScreeningSubmission>,
) -> Result<impl Responder, ApiError> {
    let request = submission.into_inner().validate()?;
    tracing::info!(article = %request.url, "Screening request accepted");

    let result = backend.screen(request).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Fetch a screening result fixture for development
#[utoipa::path(
    get,
    path = "/v1/mock-result",
    params(MockParams),
    responses(
        (status = 200, description = "Fixture retrieved", body = ScreeningResult),
        (status = 404, description = "No fixture with this name", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Screening service unreachable or failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "screening"
)]
#[get("/v1/mock-result")]
pub async fn mock_result(
    backend: web::Data<dyn ScreeningBackend>,
    query: web::Query<MockParams>,
) -> Result<impl Responder, ApiError> {
    let result = backend.mock_result(query.example.as_deref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Render a caller-supplied screening result as a sectioned report
///
/// Accepts a full screening result in the request body, so stored or
/// exported results can be re-rendered without another screening run.
#[utoipa::path(
    post,
    path = "/v1/report",
    request_body = ScreeningResult,
    params(ReportParams),
    responses(
        (status = 200, description = "Report rendered", body = crate::report::ReportView)
    ),
    tag = "screening"
)]
#[post("/v1/report")]
pub async fn render_report(
    result: web::Json<ScreeningResult>,
    query: web::Query<ReportParams>,
) -> impl Responder {
    let state = report_state(&query);
    HttpResponse::Ok().json(build_report(&result, &state))
}

/// Configure screening routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(screen).service(mock_result).service(render_report);
}
