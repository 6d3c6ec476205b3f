use chrono::{DateTime, Utc};
use gist_llm::Summary;
use serde::{Deserialize, Serialize};

/// Raw `/summarize` query string
///
/// Kept as strings so that bad values surface as validation errors
/// rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeQuery {
    /// Summary style label
    pub style: Option<String>,

    /// Target maximum word count
    pub max_words: Option<String>,
}

/// Successful `/summarize` response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Generated summary
    pub summary: String,

    /// Request metadata
    pub meta: SummaryMeta,
}

/// Metadata echoed with every summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryMeta {
    /// Model identifier
    pub model: String,

    /// Length budget that was applied
    pub max_words: u32,

    /// Style label that was applied
    pub style: String,

    /// Whether mock mode produced the summary
    pub mock: bool,
}

impl From<Summary> for SummarizeResponse {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.text,
            meta: SummaryMeta {
                model: summary.model,
                max_words: summary.max_words,
                style: summary.style.as_str().to_string(),
                mock: summary.mock,
            },
        }
    }
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub model: String,
    pub mock: bool,
    pub timestamp: DateTime<Utc>,
}
