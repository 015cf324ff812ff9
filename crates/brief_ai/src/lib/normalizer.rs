//! Punctuation normalization with a bounded restoration cost.
//!
//! Short texts are restored in full. Long texts only have a fixed prefix restored; the
//! rest is passed through verbatim.

use crate::{chunker::split_at_char, PunctuationRestorer};

/// Texts shorter than this, in characters, are restored in full
pub const FULL_RESTORE_THRESHOLD: usize = 3000;

/// Length of the prefix restored for long texts
pub const RESTORED_PREFIX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub text: String,
    /// Set when the restoration model failed and `text` is the unchanged input
    pub error: Option<String>,
}

/// Splits `text` into the part sent to the restoration model and the part kept as is
pub fn restoration_split(text: &str) -> (&str, &str) {
    if text.chars().count() < FULL_RESTORE_THRESHOLD {
        (text, "")
    } else {
        split_at_char(text, RESTORED_PREFIX_CHARS)
    }
}

/// Restores punctuation in `text`, in full or for its prefix only, see
/// [`restoration_split`]. A failing model leaves the text untouched.
#[tracing::instrument(skip_all, fields(chars = text.chars().count()))]
pub async fn normalize_punctuation<P: PunctuationRestorer>(restorer: &P, text: &str) -> Normalized {
    let (head, tail) = restoration_split(text);
    if !tail.is_empty() {
        tracing::debug!(
            restored = RESTORED_PREFIX_CHARS,
            "Restoring punctuation for the prefix only"
        );
    }

    match restorer.restore_punctuation(head).await {
        Ok(mut restored) => {
            restored.push_str(tail);
            Normalized {
                text: restored,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Punctuation restoration failed, keeping raw text");
            Normalized {
                text: text.to_string(),
                error: Some(e.to_string()),
            }
        }
    }
}
