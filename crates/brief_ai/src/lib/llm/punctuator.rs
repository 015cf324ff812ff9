use std::{collections::BTreeMap, fmt::Display, future::Future};

pub trait PunctuationRestorer {
    type Error: Display;

    /// Returns `text` with sentence punctuation inferred and inserted
    fn restore_punctuation(&self, text: &str) -> impl Future<Output = Result<String, Self::Error>>;
}

impl<T: PunctuationRestorer> PunctuationRestorer for &T {
    type Error = T::Error;

    async fn restore_punctuation(&self, text: &str) -> Result<String, Self::Error> {
        (**self).restore_punctuation(text).await
    }
}

const SENTENCE_MARKS: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Label the punctuation model uses for "no mark after this word"
pub(crate) const NO_MARK: &str = "0";

/// Drops sentence punctuation so the model sees bare words. Marks between two digits
/// survive, keeping `3.14` and `10:30` intact.
pub(crate) fn strip_sentence_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();

    chars
        .iter()
        .enumerate()
        .filter(|&(i, c)| {
            if !SENTENCE_MARKS.contains(c) {
                return true;
            }
            let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            prev_is_digit && next_is_digit
        })
        .map(|(_, c)| *c)
        .collect()
}

/// Moves per-token labels to the end of the word holding each token. Words split into
/// several tokens keep the label of their last token.
pub(crate) fn word_end_marks<'a>(
    text: &str,
    labels: impl IntoIterator<Item = (usize, &'a str)>,
) -> Vec<(usize, &'a str)> {
    let chars: Vec<char> = text.chars().collect();
    let mut by_word = BTreeMap::new();

    for (end, label) in labels {
        let word_end = chars
            .iter()
            .skip(end)
            .position(|c| c.is_whitespace())
            .map_or(chars.len(), |pos| end + pos);
        by_word.insert(word_end, label);
    }

    by_word.into_iter().collect()
}

/// Inserts each predicted mark at its character offset in `text`
pub(crate) fn insert_marks<'a>(
    text: &str,
    marks: impl IntoIterator<Item = (usize, &'a str)>,
) -> String {
    let mut marks: Vec<(usize, &str)> = marks
        .into_iter()
        .filter(|(_, mark)| *mark != NO_MARK && !mark.is_empty())
        .collect();
    marks.sort_by_key(|(offset, _)| *offset);

    let mut marks = marks.into_iter().peekable();
    let mut out = String::with_capacity(text.len() + marks.len());

    for (i, ch) in text.chars().enumerate() {
        while let Some((_, mark)) = marks.next_if(|(offset, _)| *offset <= i) {
            out.push_str(mark);
        }
        out.push(ch);
    }
    for (_, mark) in marks {
        out.push_str(mark);
    }

    out
}
