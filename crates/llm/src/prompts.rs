//! Prompt templates for summarization

use crate::style::SummaryStyle;

/// System line opening every prompt
pub const BASE_PROMPT: &str = "You are a helpful assistant that summarizes text.";

/// Format directive for `bullet points`
pub const BULLET_DIRECTIVE: &str = "Return bullet points, each line starting with '- '.";

/// Format directive for `numbered list`
pub const NUMBERED_DIRECTIVE: &str = "Return a numbered list, one item per line like '1. ...'.";

/// Style-specific instruction line
pub fn style_directive(style: SummaryStyle) -> String {
    match style {
        SummaryStyle::BulletPoints => BULLET_DIRECTIVE.to_string(),
        SummaryStyle::NumberedList => NUMBERED_DIRECTIVE.to_string(),
        other => format!("Style: {}.", other),
    }
}

/// Build the summarization prompt for already normalized text
pub fn build_prompt(text: &str, style: SummaryStyle, max_words: u32) -> String {
    format!(
        "{}\nMax {} words. {}\nReturn only the summary.\n\nTEXT:\n{}",
        BASE_PROMPT,
        max_words,
        style_directive(style),
        text
    )
}
