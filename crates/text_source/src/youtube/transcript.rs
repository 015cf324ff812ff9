use serde::Serialize;

/// One caption track available for a video
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptTrack {
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub base_url: String,
}

/// A single timed caption line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSnippet {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl TranscriptSnippet {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// All caption tracks of a video, manually created ones kept apart from the
/// auto-generated ones.
#[derive(Debug, Clone, Default)]
pub struct TranscriptList {
    pub video_id: String,
    manual: Vec<TranscriptTrack>,
    generated: Vec<TranscriptTrack>,
}

impl TranscriptList {
    pub fn new(video_id: impl Into<String>, tracks: Vec<TranscriptTrack>) -> Self {
        let (generated, manual) = tracks.into_iter().partition(|t| t.is_generated);
        Self {
            video_id: video_id.into(),
            manual,
            generated,
        }
    }

    /// Returns the first track matching one of `language_codes`, tried in order.
    /// For each language a manually created track beats a generated one.
    pub fn find_transcript(&self, language_codes: &[&str]) -> Option<&TranscriptTrack> {
        language_codes.iter().find_map(|code| {
            self.manual
                .iter()
                .chain(&self.generated)
                .find(|t| t.language_code == *code)
        })
    }

    /// Manually created tracks first, then generated ones
    pub fn iter(&self) -> impl Iterator<Item = &TranscriptTrack> {
        self.manual.iter().chain(&self.generated)
    }

    pub fn first(&self) -> Option<&TranscriptTrack> {
        self.iter().next()
    }

    pub fn len(&self) -> usize {
        self.manual.len() + self.generated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
