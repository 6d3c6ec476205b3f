use async_trait::async_trait;
use gist_common::{AppConfig, GistError, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::llm_trait::SummaryBackend;
use crate::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Longest slice of an error body kept in error messages
const MAX_ERROR_BODY: usize = 512;

/// Google Gemini `generateContent` client
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
    generation_config: GenerationConfig,
    client: Client,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GistError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Gemini client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            model,
            api_key: api_key.into(),
            timeout,
            generation_config: GenerationConfig::default(),
            client,
        })
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GistError::config("GEMINI_API_KEY is not set"))?;

        Self::new(
            &config.api_base_url,
            &config.model,
            api_key,
            config.backend_timeout(),
        )
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Request body for a prompt
    pub fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: self.generation_config,
        }
    }

    /// Single call to `generateContent`; no retries
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();

        debug!(
            "Sending generateContent request - Model: {}, Prompt length: {}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}", status);
            return Err(GistError::backend(format!(
                "Gemini API error {}: {}",
                status,
                truncate(body.trim(), MAX_ERROR_BODY)
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GistError::backend(format!("Failed to parse Gemini response: {}", e)))?;

        if let Some(reason) = result.block_reason() {
            return Err(GistError::backend(format!(
                "Prompt blocked by Gemini: {}",
                reason
            )));
        }

        let text = result.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(GistError::backend("Empty summary from model."));
        }

        debug!("Received response from Gemini - Length: {}", text.len());
        Ok(text.to_string())
    }

    fn transport_error(&self, e: reqwest::Error) -> GistError {
        if e.is_timeout() {
            GistError::backend(format!(
                "Gemini request timed out after {}s",
                self.timeout.as_secs()
            ))
        } else {
            GistError::backend(format!("Failed to reach Gemini: {}", e))
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[async_trait]
impl SummaryBackend for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}
