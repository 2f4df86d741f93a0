/// Splits `text` at every line break: `\r\n` as a unit, then each of
/// `\n`, `\r`, U+2028 LINE SEPARATOR, U+2029 PARAGRAPH SEPARATOR and
/// U+0085 NEXT LINE.
///
/// These are split semantics, not [`str::lines`] semantics: separators are
/// dropped and a trailing separator yields a trailing empty segment.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        let after_break = match c {
            '\r' => {
                if let Some(&(next_index, '\n')) = chars.peek() {
                    chars.next();
                    Some(next_index + 1)
                } else {
                    Some(index + 1)
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' | '\u{0085}' => Some(index + c.len_utf8()),
            _ => None,
        };
        if let Some(after) = after_break {
            segments.push(&text[start..index]);
            start = after;
        }
    }

    segments.push(&text[start..]);
    segments
}

/// Takes the `[start, end)` slice of the UTF-8 byte representation of `s`
/// and decodes it lossily. Indices are clamped to the valid range; a cut
/// through a multi-byte character yields U+FFFD replacement characters.
pub fn substring_by_bytes(s: &str, start: usize, end: usize) -> String {
    let bytes = s.as_bytes();
    let start = start.min(bytes.len());
    let end = end.clamp(start, bytes.len());
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

#[cfg(test)]
mod test {
    use super::{split_lines, substring_by_bytes};

    #[test]
    fn splits_on_every_line_break() {
        assert_eq!(
            split_lines("one\ntwo\r\nthree\rfour"),
            vec!["one", "two", "three", "four"]
        );
        assert_eq!(
            split_lines("a\u{2028}b\u{2029}c\u{0085}d"),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn carriage_return_line_feed_is_one_break() {
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn keeps_trailing_empty_segments() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("\n\n"), vec!["", "", ""]);
    }

    #[test]
    fn slices_bytes() {
        assert_eq!(substring_by_bytes("hello world", 0, 5), "hello");
        assert_eq!(substring_by_bytes("hello world", 6, 11), "world");
    }

    #[test]
    fn clamps_out_of_range_indices() {
        assert_eq!(substring_by_bytes("abc", 1, 100), "bc");
        assert_eq!(substring_by_bytes("abc", 50, 100), "");
        assert_eq!(substring_by_bytes("abc", 2, 1), "");
    }

    #[test]
    fn replaces_severed_multibyte_sequences() {
        // 'ü' is two bytes; cutting after the first leaves an invalid tail.
        assert_eq!(substring_by_bytes("über", 0, 1), "\u{FFFD}");
        assert_eq!(substring_by_bytes("über", 0, 2), "ü");
    }
}
