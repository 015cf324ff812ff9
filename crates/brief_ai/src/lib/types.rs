use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::summary::ChunkOutcome;

/// What the user submitted for a run
#[derive(Debug, Clone)]
pub enum ContentReference {
    /// A YouTube link in either the `watch?v=` or the `youtu.be/` form
    Video(String),
    /// An uploaded PDF document
    Document(Document),
}

/// Opaque handle to an uploaded document
#[derive(Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentReference::Video(url) => write!(f, "video {url}"),
            ContentReference::Document(doc) => write!(f, "document {}", doc.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => f.write_str("POSITIVE"),
            SentimentLabel::Negative => f.write_str("NEGATIVE"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown sentiment label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(SentimentLabel::Positive),
            "NEGATIVE" => Ok(SentimentLabel::Negative),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// Top prediction of the sentiment classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`
    pub score: f32,
}

impl SentimentResult {
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Self {
            label,
            score: score.clamp(0.0, 1.0),
        }
    }
}

/// Everything a run produces
#[derive(Debug, Clone, Serialize)]
pub struct Briefing {
    /// Source text after punctuation restoration, possibly only of its prefix
    pub source_text: String,
    /// Combined summary, or the `"Error"` sentinel when no chunk could be summarized
    pub summary: String,
    pub sentiment: Option<SentimentResult>,
    pub chunks: Vec<ChunkOutcome>,
    /// Non fatal problems to show next to the result
    pub notices: Vec<String>,
}
