use gist_common::GistError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Summary style selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SummaryStyle {
    #[default]
    #[serde(rename = "concise")]
    Concise,
    #[serde(rename = "executive")]
    Executive,
    #[serde(rename = "bullet points")]
    BulletPoints,
    #[serde(rename = "numbered list")]
    NumberedList,
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "highlights")]
    Highlights,
    #[serde(rename = "action items")]
    ActionItems,
    #[serde(rename = "key takeaways")]
    KeyTakeaways,
    #[serde(rename = "tl;dr")]
    Tldr,
}

impl SummaryStyle {
    /// Every accepted style, in documentation order
    pub const ALL: [SummaryStyle; 10] = [
        Self::Concise,
        Self::Executive,
        Self::BulletPoints,
        Self::NumberedList,
        Self::Simple,
        Self::Technical,
        Self::Highlights,
        Self::ActionItems,
        Self::KeyTakeaways,
        Self::Tldr,
    ];

    /// Wire label of the style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Executive => "executive",
            Self::BulletPoints => "bullet points",
            Self::NumberedList => "numbered list",
            Self::Simple => "simple",
            Self::Technical => "technical",
            Self::Highlights => "highlights",
            Self::ActionItems => "action items",
            Self::KeyTakeaways => "key takeaways",
            Self::Tldr => "tl;dr",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = GistError;

    /// Labels are matched exactly; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                GistError::validation(format!(
                    "Invalid style '{}'. Allowed values: {}",
                    s,
                    allowed.join(", ")
                ))
            })
    }
}
