// HTTP API
// axum router and handlers for the analysis endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

use crate::models::{
    AnalyzeArticleQuery, AnalyzeTextRequest, ArticleAnalysisResponse, ErrorResponse,
};
use crate::services::article::{ArticleFetcher, FetchError};
use crate::services::pipeline::{AnalysisError, AnalysisPipeline};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub fetcher: Arc<ArticleFetcher>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/articles/analyze", get(analyze_article))
        .route("/analyze", post(analyze_text))
        .with_state(state)
}

pub enum ApiError {
    Analysis(AnalysisError),
    Fetch(FetchError),
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        Self::Analysis(e)
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Analysis(e) => {
                let status = match e {
                    AnalysisError::InsufficientContent | AnalysisError::Lexical(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    AnalysisError::Embedding(_) => StatusCode::BAD_GATEWAY,
                    AnalysisError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.to_string())
            }
            ApiError::Fetch(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };
        warn!(status = status.as_u16(), error = %message, "api.request_failed");
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// GET /articles/analyze?url=... — fetch an article and score its body text.
async fn analyze_article(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeArticleQuery>,
) -> Result<Json<ArticleAnalysisResponse>, ApiError> {
    let content = state.fetcher.fetch_article(&query.url).await?;
    let report = state.pipeline.analyze(&content).await?;
    Ok(Json(ArticleAnalysisResponse {
        ai_written_percentage: report.display.clone(),
        report,
    }))
}

/// POST /analyze — score raw text supplied in the request body.
async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<crate::models::AnalysisReport>, ApiError> {
    let report = state.pipeline.analyze(&request.text).await?;
    Ok(Json(report))
}
