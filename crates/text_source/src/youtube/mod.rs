mod client;
pub mod parser;
mod transcript;
mod url;

use std::future::Future;

use itertools::Itertools;

use crate::SourceError;

pub use client::YouTubeClient;
pub use transcript::{TranscriptList, TranscriptSnippet, TranscriptTrack};
pub use url::{parse_video_id, VideoId};

/// Lists and downloads the transcripts attached to a video
pub trait TranscriptSource {
    fn list_transcripts(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<TranscriptList, SourceError>>;

    fn fetch_track(
        &self,
        track: &TranscriptTrack,
    ) -> impl Future<Output = Result<Vec<TranscriptSnippet>, SourceError>>;
}

impl<T: TranscriptSource> TranscriptSource for &T {
    async fn list_transcripts(&self, video_id: &VideoId) -> Result<TranscriptList, SourceError> {
        (**self).list_transcripts(video_id).await
    }

    async fn fetch_track(
        &self,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptSnippet>, SourceError> {
        (**self).fetch_track(track).await
    }
}

/// Language codes tried, in order, before falling back to any transcript
pub const PREFERRED_LANGUAGES: &[&str] = &["en"];

/// Resolves `url` to a video, picks a transcript and returns its text with the
/// timing metadata dropped.
///
/// An English transcript is preferred. When none exists, or fetching it fails, the
/// first listed transcript in any language is used instead.
#[tracing::instrument(skip(source))]
pub async fn fetch_transcript_text<S: TranscriptSource>(
    source: &S,
    url: &str,
) -> Result<String, SourceError> {
    let video_id = parse_video_id(url)?;
    let transcripts = source.list_transcripts(&video_id).await?;

    let preferred = match transcripts.find_transcript(PREFERRED_LANGUAGES) {
        Some(track) => source
            .fetch_track(track)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to fetch preferred transcript"))
            .ok(),
        None => None,
    };

    let snippets = match preferred {
        Some(snippets) => snippets,
        None => {
            let fallback = transcripts
                .first()
                .ok_or_else(|| SourceError::NoTranscriptFound {
                    video_id: video_id.to_string(),
                })?;
            tracing::info!(language = %fallback.language_code, "Falling back to first transcript");
            source.fetch_track(fallback).await?
        }
    };

    Ok(snippets.iter().map(|s| s.text.as_str()).join(" "))
}
