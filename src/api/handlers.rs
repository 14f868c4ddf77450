use std::convert::Infallible;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use warp::http::StatusCode;
use warp::multipart::FormData;
use warp::reject::{
    InvalidHeader, InvalidQuery, MethodNotAllowed, MissingHeader, PayloadTooLarge, UnsupportedMediaType,
};
use warp::filters::cors::CorsForbidden;
use warp::reply::Response;
use warp::{Rejection, Reply};
use crate::api::upload::read_image_upload;
use crate::config::constants::DEFAULT_HISTORY_LIMIT;
use crate::errors::DetectiveError;
use crate::services::defect_analyzer::DefectAnalyzer;
use crate::structs::analysis_response::AnalysisResponse;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

pub fn error_reply(status: StatusCode, detail: &str) -> Response {
    json_reply(&ErrorBody { detail: detail.to_string() }, status)
}

/// 4xx errors carry their own text; anything else is logged and prefixed
/// with the operation that failed.
fn failure_reply(error: DetectiveError, context: &str) -> Response {
    if error.is_client_error() {
        return error_reply(error.status_code(), &error.to_string());
    }

    log::error!("❌ {}: {}", context, error);
    error_reply(error.status_code(), &format!("{}: {}", context, error))
}

pub async fn root_handler() -> Result<Response, Infallible> {
    Ok(json_reply(&json!({ "message": "Defect Detective API is running" }), StatusCode::OK))
}

pub async fn analyze_handler(form: FormData, analyzer: Arc<DefectAnalyzer>) -> Result<Response, Infallible> {
    let result = match read_image_upload(form).await {
        Ok(upload) => analyzer.analyze(upload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(analysis) => Ok(json_reply(&AnalysisResponse::completed(analysis), StatusCode::OK)),
        Err(e) => Ok(failure_reply(e, "Analysis failed")),
    }
}

pub async fn history_handler(query: HistoryQuery, analyzer: Arc<DefectAnalyzer>) -> Result<Response, Infallible> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    match analyzer.history(limit).await {
        Ok(analyses) => Ok(json_reply(&analyses, StatusCode::OK)),
        Err(e) => Ok(failure_reply(e, "Failed to fetch history")),
    }
}

pub async fn get_analysis_handler(analysis_id: String, analyzer: Arc<DefectAnalyzer>) -> Result<Response, Infallible> {
    match analyzer.get(&analysis_id).await {
        Ok(analysis) => Ok(json_reply(&analysis, StatusCode::OK)),
        Err(e) => Ok(failure_reply(e, "Failed to fetch analysis")),
    }
}

/// Renders filter rejections in the same `{"detail": ...}` shape as handler
/// errors.
pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let (status, detail) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = rejection.find::<InvalidQuery>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if rejection.find::<PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Uploaded file is too large".to_string())
    } else if let Some(e) = rejection.find::<InvalidHeader>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if let Some(e) = rejection.find::<MissingHeader>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if let Some(e) = rejection.find::<UnsupportedMediaType>() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
    } else if let Some(e) = rejection.find::<CorsForbidden>() {
        (StatusCode::FORBIDDEN, e.to_string())
    } else if rejection.find::<MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(error_reply(status, &detail))
}
