use crate::{chunker::truncate_chars, SentimentClassifier, SentimentResult};

/// Inputs are cut to this many characters before classification
pub const MAX_SENTIMENT_CHARS: usize = 512;

/// Classifies the tone of `text`, looking at no more than its first
/// [`MAX_SENTIMENT_CHARS`] characters
#[tracing::instrument(skip_all, fields(chars = text.chars().count()))]
pub async fn score_sentiment<C: SentimentClassifier>(
    classifier: &C,
    text: &str,
) -> Result<SentimentResult, C::Error> {
    let input = truncate_chars(text, MAX_SENTIMENT_CHARS);
    let result = classifier.classify(input).await?;
    tracing::info!(label = %result.label, score = result.score, "Scored sentiment");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::SentimentLabel;

    #[derive(Default)]
    struct Recording {
        inputs: Mutex<Vec<String>>,
    }

    impl SentimentClassifier for Recording {
        type Error = String;

        async fn classify(&self, text: &str) -> Result<SentimentResult, Self::Error> {
            self.inputs.lock().unwrap().push(text.to_string());
            Ok(SentimentResult::new(SentimentLabel::Positive, 0.9))
        }
    }

    #[tokio::test]
    async fn long_input_is_truncated_to_512_chars() {
        let classifier = Recording::default();
        let text = "ö".repeat(2000);
        score_sentiment(&classifier, &text).await.unwrap();

        let inputs = classifier.inputs.lock().unwrap();
        assert_eq!(inputs[0].chars().count(), MAX_SENTIMENT_CHARS);
        assert!(text.starts_with(&inputs[0]));
    }

    #[tokio::test]
    async fn short_input_is_passed_unchanged() {
        let classifier = Recording::default();
        let result = score_sentiment(&classifier, "a fine summary").await.unwrap();

        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(*classifier.inputs.lock().unwrap(), vec!["a fine summary"]);
    }
}
