//! Chunked abstractive summarization.
//!
//! The text is cut into fixed-size chunks which are summarized one after another. Every
//! chunk yields a [`ChunkOutcome`]; failed chunks are skipped when the partial summaries
//! are joined.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    chunker::{chunk_text, CHUNK_SIZE},
    GenerationParams, Summarizer,
};

/// Returned in place of the summary when no chunk could be summarized
pub const SUMMARY_SENTINEL: &str = "Error";

/// Progress report emitted before each chunk is summarized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkProgress {
    /// One based number of the chunk being processed
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for ChunkProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chunk {} of {}", self.current, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChunkOutcome {
    Summarized { index: usize, summary: String },
    Failed { index: usize, reason: String },
}

impl ChunkOutcome {
    pub fn index(&self) -> usize {
        match self {
            ChunkOutcome::Summarized { index, .. } | ChunkOutcome::Failed { index, .. } => *index,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            ChunkOutcome::Summarized { summary, .. } => Some(summary.as_str()),
            ChunkOutcome::Failed { .. } => None,
        }
    }
}

/// Per-chunk outcomes, in chunk order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkedSummary {
    pub outcomes: Vec<ChunkOutcome>,
}

impl ChunkedSummary {
    /// Successful partial summaries, in chunk order
    pub fn partials(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(ChunkOutcome::summary)
    }

    /// The partial summaries joined with single spaces, or [`SUMMARY_SENTINEL`] when
    /// there are none
    pub fn combined(&self) -> String {
        if self.is_total_failure() {
            SUMMARY_SENTINEL.to_string()
        } else {
            self.partials().join(" ")
        }
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.partials().count()
    }

    pub fn is_total_failure(&self) -> bool {
        self.partials().next().is_none()
    }
}

/// Summarizes `text` chunk by chunk, strictly sequentially.
///
/// `on_progress` is called before each chunk. A failing chunk is recorded and skipped;
/// it never aborts the remaining ones.
#[tracing::instrument(skip_all, fields(chars = text.chars().count()))]
pub async fn summarize_chunks<S, F>(
    summarizer: &S,
    text: &str,
    params: &GenerationParams,
    mut on_progress: F,
) -> ChunkedSummary
where
    S: Summarizer,
    F: FnMut(ChunkProgress),
{
    let chunks = chunk_text(text, CHUNK_SIZE);
    let total = chunks.len();
    let mut outcomes = Vec::with_capacity(total);

    for chunk in chunks {
        let progress = ChunkProgress {
            current: chunk.index + 1,
            total,
        };
        tracing::info!(%progress, "Summarizing");
        on_progress(progress);

        let outcome = match summarizer.summarize(chunk.text, params).await {
            Ok(response) => ChunkOutcome::Summarized {
                index: chunk.index,
                summary: response.summary_text,
            },
            Err(e) => {
                tracing::warn!(index = chunk.index, error = %e, "Skipping chunk");
                ChunkOutcome::Failed {
                    index: chunk.index,
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let summary = ChunkedSummary { outcomes };
    tracing::info!(
        chunks = total,
        failed = summary.failed_count(),
        "Finished chunked summarization"
    );
    summary
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Mutex};

    use super::*;
    use crate::SummaryResponse;

    /// Summarizes a chunk as its first character repeated, failing on chosen calls
    #[derive(Default)]
    struct FirstLetter {
        fail_calls: HashSet<usize>,
        calls: Mutex<Vec<(usize, GenerationParams)>>,
    }

    impl Summarizer for FirstLetter {
        type Error = String;

        async fn summarize(
            &self,
            text: &str,
            params: &GenerationParams,
        ) -> Result<SummaryResponse, Self::Error> {
            let mut calls = self.calls.lock().unwrap();
            let call = calls.len();
            calls.push((text.chars().count(), params.clone()));
            if self.fail_calls.contains(&call) {
                return Err(format!("call {call} failed"));
            }
            let first = text.chars().next().unwrap_or('?');
            Ok(SummaryResponse {
                summary_text: first.to_string().repeat(3),
            })
        }
    }

    fn failing_on(calls: &[usize]) -> FirstLetter {
        FirstLetter {
            fail_calls: calls.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn abc_text() -> String {
        format!("{}{}{}", "a".repeat(2000), "b".repeat(2000), "c".repeat(500))
    }

    #[tokio::test]
    async fn summarizes_every_chunk_in_order() {
        let summarizer = FirstLetter::default();
        let mut progress = Vec::new();
        let summary = summarize_chunks(
            &summarizer,
            &abc_text(),
            &GenerationParams::default(),
            |p| progress.push(p.to_string()),
        )
        .await;

        assert_eq!(summary.combined(), "aaa bbb ccc");
        assert_eq!(
            progress,
            vec!["chunk 1 of 3", "chunk 2 of 3", "chunk 3 of 3"]
        );

        let calls = summarizer.calls.lock().unwrap();
        let lengths: Vec<usize> = calls.iter().map(|(len, _)| *len).collect();
        assert_eq!(lengths, vec![2000, 2000, 500]);
        assert!(calls.iter().all(|(_, p)| *p == GenerationParams::default()));
    }

    #[tokio::test]
    async fn failed_chunk_is_skipped() {
        let summarizer = failing_on(&[1]);
        let summary =
            summarize_chunks(&summarizer, &abc_text(), &GenerationParams::default(), |_| {}).await;

        assert_eq!(summary.combined(), "aaa ccc");
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.outcomes.len(), 3);
        assert!(matches!(
            &summary.outcomes[1],
            ChunkOutcome::Failed { index: 1, reason } if reason == "call 1 failed"
        ));
    }

    #[tokio::test]
    async fn all_chunks_failing_yields_sentinel() {
        let summarizer = failing_on(&[0, 1, 2]);
        let summary =
            summarize_chunks(&summarizer, &abc_text(), &GenerationParams::default(), |_| {}).await;

        assert!(summary.is_total_failure());
        assert_eq!(summary.combined(), SUMMARY_SENTINEL);
        assert_eq!(summarizer.calls.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_text_yields_sentinel() {
        let summarizer = FirstLetter::default();
        let summary = summarize_chunks(&summarizer, "", &GenerationParams::default(), |_| {}).await;

        assert!(summary.outcomes.is_empty());
        assert_eq!(summary.combined(), "Error");
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(ChunkOutcome::Failed {
            index: 2,
            reason: "timeout".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["index"], 2);
    }
}
