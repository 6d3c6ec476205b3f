use gist_common::{AppConfig, Result};
use gist_llm::Summarizer;

/// Shared application state
///
/// Read-only after startup; handlers never lock it.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization pipeline bound to the configured backend
    pub summarizer: Summarizer,
}

impl AppState {
    /// Create state with the backend selected by `config`
    pub fn new(config: AppConfig) -> Result<Self> {
        let summarizer = Summarizer::from_config(&config)?;
        Ok(Self::with_summarizer(config, summarizer))
    }

    /// Create state around an existing summarizer
    pub fn with_summarizer(config: AppConfig, summarizer: Summarizer) -> Self {
        Self { config, summarizer }
    }
}
