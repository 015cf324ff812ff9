pub mod builder;

use text_source::{extract_pdf_text, fetch_transcript_text, TranscriptSource};

use crate::{
    normalizer::normalize_punctuation,
    sentiment::score_sentiment,
    summary::{summarize_chunks, ChunkProgress},
    Briefing, ContentReference, Error, GenerationParams, PunctuationRestorer,
    SentimentClassifier, Summarizer,
};

/// Runs one content reference through extraction, punctuation restoration, chunked
/// summarization and sentiment scoring, strictly in that order
#[derive(Debug)]
pub struct BriefingProcessor<T, P, S, C>
where
    T: TranscriptSource,
    P: PunctuationRestorer,
    S: Summarizer,
    C: SentimentClassifier,
{
    pub(crate) transcripts: T,
    pub(crate) punctuator: P,
    pub(crate) summarizer: S,
    pub(crate) classifier: C,
    pub(crate) generation: GenerationParams,
}

impl<T, P, S, C> BriefingProcessor<T, P, S, C>
where
    T: TranscriptSource,
    P: PunctuationRestorer,
    S: Summarizer,
    C: SentimentClassifier,
{
    /// Pulls the raw text out of `reference`.
    ///
    /// # Returns
    /// * `Err(Error::InvalidReference)` if a video link has neither accepted form.
    /// * `Err(Error::Extraction)` if fetching or parsing the source failed.
    /// * `Err(Error::EmptyText)` if the source holds no text at all.
    #[tracing::instrument(skip(self, reference), fields(reference = %reference))]
    pub async fn extract(&self, reference: &ContentReference) -> Result<String, Error> {
        let text = match reference {
            ContentReference::Video(url) => fetch_transcript_text(&self.transcripts, url)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?,
            ContentReference::Document(document) => extract_pdf_text(&document.bytes)
                .inspect_err(|e| tracing::error!(error = %e, "Failed to read document"))?,
        };

        if text.trim().is_empty() {
            return Err(Error::EmptyText(reference.to_string()));
        }

        tracing::info!(chars = text.chars().count(), "Extracted text");
        Ok(text)
    }

    /// Produces a briefing for `reference`.
    ///
    /// Only extraction failures abort the run. A failing punctuation model leaves the
    /// text unpunctuated, failing chunks are skipped and a failing classifier leaves the
    /// sentiment empty; each of these adds a notice to the briefing.
    #[tracing::instrument(skip(self, reference, on_progress), fields(reference = %reference))]
    pub async fn run<F>(
        &self,
        reference: &ContentReference,
        on_progress: F,
    ) -> Result<Briefing, Error>
    where
        F: FnMut(ChunkProgress),
    {
        let raw_text = self.extract(reference).await?;
        let mut notices = Vec::new();

        let normalized = normalize_punctuation(&self.punctuator, &raw_text).await;
        if let Some(error) = normalized.error {
            notices.push(format!("Punctuation could not be restored: {error}"));
        }
        let source_text = normalized.text;

        let chunked =
            summarize_chunks(&self.summarizer, &source_text, &self.generation, on_progress).await;
        if chunked.is_total_failure() {
            notices.push("No part of the text could be summarized".to_string());
        }
        let summary = chunked.combined();

        let sentiment = match score_sentiment(&self.classifier, &summary).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to score sentiment");
                notices.push(format!("Sentiment could not be determined: {e}"));
                None
            }
        };

        Ok(Briefing {
            source_text,
            summary,
            sentiment,
            chunks: chunked.outcomes,
            notices,
        })
    }
}
