//! Whitespace-safe text chunking for length-limited TTS backends.

/// Split `text` into chunks of at most `max_chars` characters, breaking only
/// at spaces.
///
/// Each split consumes the space it happened at, so rejoining the chunks with
/// single spaces reproduces the input. When no space exists inside the limit
/// the remainder is returned whole as a final oversized chunk; a word is
/// never cut in half. Empty chunks are never returned.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_chars {
        let Some(split) = last_space_within(rest, max_chars) else {
            break;
        };
        let head = &rest[..split];
        if !head.is_empty() {
            chunks.push(head.to_string());
        }
        rest = &rest[split + 1..];
    }

    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }

    chunks
}

/// Byte offset of the last space at or before character position `max_chars`.
fn last_space_within(text: &str, max_chars: usize) -> Option<usize> {
    let mut last = None;
    for (count, (byte_idx, ch)) in text.char_indices().enumerate() {
        if count > max_chars {
            break;
        }
        if ch == ' ' {
            last = Some(byte_idx);
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_into_chunks("hello world", 100), vec!["hello world"]);
    }

    #[test]
    fn test_split_at_last_space_within_limit() {
        assert_eq!(
            split_into_chunks("aaaa bbbb cccc", 9),
            vec!["aaaa bbbb", "cccc"]
        );
    }

    #[test]
    fn test_no_space_means_one_oversized_chunk() {
        assert_eq!(split_into_chunks("abcdefghij", 3), vec!["abcdefghij"]);
    }

    #[test]
    fn test_oversized_tail_is_kept_whole() {
        // Once no split point exists within the limit, the rest goes out as
        // one chunk rather than being cut mid-word.
        assert_eq!(
            split_into_chunks("one twothreefourfive", 4),
            vec!["one", "twothreefourfive"]
        );
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(split_into_chunks("", 10).is_empty());
    }

    #[test]
    fn test_leading_space_never_yields_empty_chunk() {
        let chunks = split_into_chunks(" abcd", 3);
        assert_eq!(chunks, vec!["abcd"]);
    }

    #[test]
    fn test_multibyte_text_counts_chars_not_bytes() {
        // Each 'è' is two bytes; limits are in characters.
        let chunks = split_into_chunks("èèèè èèèè", 4);
        assert_eq!(chunks, vec!["èèèè", "èèèè"]);
    }

    proptest! {
        #[test]
        fn prop_rejoining_chunks_reproduces_input(
            words in proptest::collection::vec("[a-z]{1,12}", 1..40),
            max_chars in 1usize..30,
        ) {
            let text = words.join(" ");
            let chunks = split_into_chunks(&text, max_chars);
            prop_assert_eq!(chunks.join(" "), text);
        }

        #[test]
        fn prop_only_the_last_chunk_may_exceed_the_limit(
            words in proptest::collection::vec("[a-z]{1,12}", 1..40),
            max_chars in 1usize..30,
        ) {
            let text = words.join(" ");
            let chunks = split_into_chunks(&text, max_chars);
            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert!(chunk.chars().count() <= max_chars);
            }
        }

        #[test]
        fn prop_no_chunk_is_empty(
            text in "[a-z ]{0,80}",
            max_chars in 1usize..30,
        ) {
            for chunk in split_into_chunks(&text, max_chars) {
                prop_assert!(!chunk.is_empty());
            }
        }
    }
}
