use regex::Regex;
use std::sync::OnceLock;

/// Token substituted for every URL in the input
pub const URL_PLACEHOLDER: &str = "[URL]";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid URL pattern"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Normalize text before it is sent to the model
///
/// URLs are replaced with [`URL_PLACEHOLDER`], then whitespace runs
/// (spaces, tabs, newlines) collapse to one space and the ends are trimmed.
pub fn clean_text(text: &str) -> String {
    let text = url_regex().replace_all(text, URL_PLACEHOLDER);
    let text = whitespace_regex().replace_all(&text, " ");
    text.trim().to_string()
}
