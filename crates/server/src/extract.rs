//! Request body adapter: `application/json` or `text/plain` into plain text

use gist_common::{GistError, Result};
use serde_json::Value;

const UNSUPPORTED_CONTENT_TYPE: &str =
    "Unsupported Content-Type. Use application/json or text/plain.";

/// Body format declared by the `Content-Type` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    PlainText,
}

impl BodyKind {
    /// Match on the media type, ignoring case and parameters such as `charset`
    pub fn from_content_type(content_type: Option<&str>) -> Result<Self> {
        let content_type = content_type
            .map(|ct| ct.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            Ok(Self::Json)
        } else if content_type.starts_with("text/plain") {
            Ok(Self::PlainText)
        } else {
            Err(GistError::validation(UNSUPPORTED_CONTENT_TYPE))
        }
    }
}

/// Extract the text to summarize from a request body
pub fn extract_text(content_type: Option<&str>, body: &[u8]) -> Result<String> {
    let text = match BodyKind::from_content_type(content_type)? {
        BodyKind::PlainText => String::from_utf8_lossy(body).into_owned(),
        BodyKind::Json => text_from_json(body)?,
    };

    if text.trim().is_empty() {
        return Err(GistError::validation("Text cannot be empty."));
    }

    Ok(text)
}

fn text_from_json(body: &[u8]) -> Result<String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GistError::validation(format!("Malformed JSON body: {}", e)))?;

    match value.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(GistError::validation("'text' must be a string.")),
        None => Err(GistError::validation("JSON body must include 'text'.")),
    }
}
