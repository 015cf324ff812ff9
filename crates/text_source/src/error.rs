#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: String, reason: String },
    #[error("Transcripts are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },
    #[error("No transcript found for video {video_id}")]
    NoTranscriptFound { video_id: String },
    #[error("YouTube returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}
