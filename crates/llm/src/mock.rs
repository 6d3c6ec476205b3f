use async_trait::async_trait;
use gist_common::Result;
use tracing::debug;

use crate::llm_trait::SummaryBackend;

/// Text returned for every prompt in mock mode
pub const MOCK_SUMMARY_TEXT: &str = "This is a mock summary.";

/// Offline backend that never calls the network
#[derive(Debug, Clone)]
pub struct MockBackend {
    model: String,
}

impl MockBackend {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl SummaryBackend for MockBackend {
    fn model(&self) -> &str {
        &self.model
    }

    fn is_mock(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Mock backend skipping model call - Prompt length: {}", prompt.len());
        Ok(MOCK_SUMMARY_TEXT.to_string())
    }
}
