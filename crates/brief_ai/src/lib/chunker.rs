//! Character based text chunking.
//!
//! All lengths and offsets here count `char`s, so multi-byte text is never cut inside
//! a code point.

use serde::Serialize;

/// Length of every summarization chunk, in characters; only the last may be shorter
pub const CHUNK_SIZE: usize = 2000;

/// A contiguous slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextChunk<'a> {
    /// Zero based position of the chunk
    pub index: usize,
    /// Character offset of the chunk's first character in the source
    pub offset: usize,
    pub text: &'a str,
}

/// Splits `text` into ordered, non-overlapping chunks of at most `chunk_size`
/// characters that together cover the whole string. Only the last chunk may be shorter.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<TextChunk<'_>> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;
    let mut offset = 0;

    while !rest.is_empty() {
        let (head, tail) = split_at_char(rest, chunk_size);
        chunks.push(TextChunk {
            index: chunks.len(),
            offset,
            text: head,
        });
        offset += chunk_size;
        rest = tail;
    }

    chunks
}

/// Splits `text` after its first `n` characters. When the text is shorter the tail is
/// empty.
pub fn split_at_char(text: &str, n: usize) -> (&str, &str) {
    let byte_idx = text
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(idx, _)| idx);
    text.split_at(byte_idx)
}

/// The first `n` characters of `text`
pub fn truncate_chars(text: &str, n: usize) -> &str {
    split_at_char(text, n).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_count_is_ceiling_of_length_over_size() {
        for len in [0, 1, 1999, 2000, 2001, 4000, 4500, 10_001] {
            let text = "a".repeat(len);
            let chunks = chunk_text(&text, CHUNK_SIZE);
            assert_eq!(chunks.len(), len.div_ceil(CHUNK_SIZE), "length {len}");
            assert!(chunks.iter().all(|c| c.text.chars().count() <= CHUNK_SIZE));
        }
    }

    #[test]
    fn chunks_reconstruct_the_source() {
        let text: String = (0..4321).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = chunk_text(&text, CHUNK_SIZE);
        let rebuilt: String = chunks.iter().map(|c| c.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn offsets_are_strictly_increasing_and_contiguous() {
        let text = "x".repeat(6500);
        let chunks = chunk_text(&text, CHUNK_SIZE);
        let mut expected_offset = 0;
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert_eq!(chunk.offset, expected_offset);
            expected_offset += chunk.text.chars().count();
        }
        assert_eq!(expected_offset, 6500);
    }

    #[test]
    fn text_of_4500_chars_gives_three_chunks() {
        let text = "b".repeat(4500);
        let lengths: Vec<usize> = chunk_text(&text, CHUNK_SIZE)
            .iter()
            .map(|c| c.text.len())
            .collect();
        assert_eq!(lengths, vec![2000, 2000, 500]);
    }

    #[test]
    fn multibyte_characters_are_never_split() {
        let text = "é".repeat(5);
        let chunks = chunk_text(&text, 2);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn split_and_truncate_count_characters() {
        assert_eq!(split_at_char("añob", 2), ("añ", "ob"));
        assert_eq!(split_at_char("ab", 5), ("ab", ""));
        assert_eq!(truncate_chars("üüüü", 3), "üüü");
    }
}
