//! Query parameter validation for summary requests

use gist_common::{GistError, Result};

use crate::style::SummaryStyle;

/// Smallest accepted `max_words`
pub const MIN_MAX_WORDS: u32 = 20;

/// Largest accepted `max_words`
pub const MAX_MAX_WORDS: u32 = 400;

/// `max_words` used when the caller omits it
pub const DEFAULT_MAX_WORDS: u32 = 120;

/// Validated style and length budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    pub style: SummaryStyle,
    pub max_words: u32,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            style: SummaryStyle::default(),
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl SummaryParams {
    /// Validate raw parameter values
    ///
    /// A missing `style` means `concise`, a missing `max_words` means 120.
    /// Out-of-range lengths are rejected, never clamped.
    pub fn parse(style: Option<&str>, max_words: Option<&str>) -> Result<Self> {
        let style = match style {
            Some(raw) => raw.parse()?,
            None => SummaryStyle::default(),
        };

        let max_words = match max_words {
            Some(raw) => parse_max_words(raw)?,
            None => DEFAULT_MAX_WORDS,
        };

        Ok(Self { style, max_words })
    }
}

/// Parse and range-check a `max_words` value
pub fn parse_max_words(raw: &str) -> Result<u32> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        GistError::validation(format!("max_words must be an integer, got '{}'", raw))
    })?;

    check_max_words(value)
}

/// Range-check an already numeric `max_words`
pub fn check_max_words(value: i64) -> Result<u32> {
    if value < MIN_MAX_WORDS as i64 || value > MAX_MAX_WORDS as i64 {
        return Err(GistError::validation(format!(
            "max_words must be between {} and {}, got {}",
            MIN_MAX_WORDS, MAX_MAX_WORDS, value
        )));
    }

    Ok(value as u32)
}
