use actix_web::{http::header, post, web, HttpRequest, HttpResponse};
use gist_common::GistError;
use gist_llm::{SummaryParams, SummaryRequest};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::extract::extract_text;
use crate::state::AppState;
use crate::types::{SummarizeQuery, SummarizeResponse};

/// Summarize a JSON (`{"text": ...}`) or `text/plain` body
#[post("/summarize")]
pub async fn summarize(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let text = extract_text(content_type, &body)?;

    let query = web::Query::<SummarizeQuery>::from_query(req.query_string())
        .map_err(|e| GistError::validation(format!("Invalid query string: {}", e)))?;
    let params = SummaryParams::parse(query.style.as_deref(), query.max_words.as_deref())?;

    let request = SummaryRequest::new(text, params)?;
    let summary = state.summarizer.summarize(&request).await?;

    info!(
        "Summary generated - model: {}, style: {}, length: {} chars, mock: {}",
        summary.model,
        summary.style,
        summary.text.len(),
        summary.mock
    );

    Ok(HttpResponse::Ok().json(SummarizeResponse::from(summary)))
}
