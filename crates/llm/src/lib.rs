//! gist LLM integration
//!
//! Text normalization, prompt construction, and the Gemini / mock
//! summary backends

mod client;
mod llm_trait;
mod mock;
mod normalize;
mod params;
mod prompts;
mod style;
mod summarize;
mod types;

pub use client::GeminiClient;
pub use llm_trait::SummaryBackend;
pub use mock::{MockBackend, MOCK_SUMMARY_TEXT};
pub use normalize::{clean_text, URL_PLACEHOLDER};
pub use params::{
    check_max_words, parse_max_words, SummaryParams, DEFAULT_MAX_WORDS, MAX_MAX_WORDS,
    MIN_MAX_WORDS,
};
pub use prompts::{build_prompt, style_directive, BASE_PROMPT, BULLET_DIRECTIVE, NUMBERED_DIRECTIVE};
pub use style::SummaryStyle;
pub use summarize::Summarizer;
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, Summary, SummaryRequest,
};
