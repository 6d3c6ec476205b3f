use async_trait::async_trait;
use gist_common::Result;

/// Something that turns a prompt into summary text
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Model identifier reported in response metadata
    fn model(&self) -> &str;

    /// Whether this backend skips the real model
    fn is_mock(&self) -> bool {
        false
    }

    /// Generate text from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
