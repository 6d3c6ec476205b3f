use gist_common::{AppConfig, GistError, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::llm_trait::SummaryBackend;
use crate::mock::MockBackend;
use crate::normalize::clean_text;
use crate::prompts::build_prompt;
use crate::types::{Summary, SummaryRequest};

/// Normalize, prompt, call the backend, check the result
#[derive(Clone)]
pub struct Summarizer {
    backend: Arc<dyn SummaryBackend>,
}

impl Summarizer {
    /// Create new summarizer around a backend
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self { backend }
    }

    /// Pick the mock or Gemini backend from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let backend: Arc<dyn SummaryBackend> = if config.mock_mode {
            info!("Mock mode enabled; Gemini will not be called");
            Arc::new(MockBackend::new(&config.model))
        } else {
            Arc::new(GeminiClient::from_config(config)?)
        };

        Ok(Self::new(backend))
    }

    /// Model identifier of the active backend
    pub fn model(&self) -> &str {
        self.backend.model()
    }

    pub fn is_mock(&self) -> bool {
        self.backend.is_mock()
    }

    /// Summarize a validated request
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<Summary> {
        let cleaned = clean_text(&request.text);
        info!(
            "Starting summarization - Text length: {} chars (cleaned: {}), style: {}, max_words: {}",
            request.text.len(),
            cleaned.len(),
            request.style,
            request.max_words
        );

        let prompt = build_prompt(&cleaned, request.style, request.max_words);

        let started = Instant::now();
        let output = self.backend.generate(&prompt).await?;
        debug!(
            "Backend responded in {:?} - Length: {}",
            started.elapsed(),
            output.len()
        );

        let text = output.trim();
        if text.is_empty() {
            return Err(GistError::backend("Empty summary from model."));
        }

        Ok(Summary {
            text: text.to_string(),
            model: self.backend.model().to_string(),
            style: request.style,
            max_words: request.max_words,
            mock: self.backend.is_mock(),
        })
    }
}
