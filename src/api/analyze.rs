//! REST API endpoint for text analysis

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::UnifiedAnalysis;
use crate::service::AnalysisService;

/// Request body for text analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The text to analyze
    pub text: String,
}

/// Analyze a text for arguments and manipulation techniques
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = UnifiedAnalysis),
        (status = 400, description = "Empty input text"),
        (status = 500, description = "Analysis failed")
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze_text(
    service: web::Data<AnalysisService>,
    input: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let analysis = service.analyze_text(&input.text).await?;
    Ok(HttpResponse::Ok().json(analysis))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_text);
}

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    paths(analyze_text, crate::api::health::health),
    components(schemas(AnalyzeRequest, UnifiedAnalysis)),
    tags(
        (name = "analysis", description = "Rhetorical manipulation analysis"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
