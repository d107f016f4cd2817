//! Byte ranges into a provider payload.

use std::ops::Range;

/// A byte range into the raw payload text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift the span right by `offset` bytes
    pub fn shifted(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Span of the single character at a 1-based line and byte column of
    /// `text`, the position format reported by `serde_json`.
    ///
    /// Columns past the end of the line clamp to the line end; columns inside
    /// a multibyte character snap back to its first byte.
    pub fn at_line_column(text: &str, line: usize, column: usize) -> Self {
        let line_start = text
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>();
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |idx| line_start + idx);

        let mut offset = (line_start + column.saturating_sub(1)).min(line_end);
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let width = text[offset..].chars().next().map_or(0, char::len_utf8);
        Self::new(offset..offset + width)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_span_len_and_empty() {
        let span = Span::new(4..9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3..3).is_empty());
    }

    #[test]
    fn test_shifted() {
        assert_eq!(Span::new(1..3).shifted(10), Span::new(11..13));
    }

    #[test]
    fn test_at_line_column_first_line() {
        let text = "{\"a\": x}";
        let span = Span::at_line_column(text, 1, 7);
        assert_eq!(&text[span.start()..span.end()], "x");
    }

    #[test]
    fn test_at_line_column_later_line() {
        let text = "{\n  \"word\": ?\n}";
        let span = Span::at_line_column(text, 2, 11);
        assert_eq!(&text[span.start()..span.end()], "?");
    }

    #[test]
    fn test_at_line_column_counts_bytes() {
        let text = "{\"froh über\": x}";
        let span = Span::at_line_column(text, 1, 16);
        assert_eq!(&text[span.start()..span.end()], "x");
    }

    #[test]
    fn test_at_line_column_snaps_to_char_boundary() {
        let text = "{\"ü\": 1}";
        let span = Span::at_line_column(text, 1, 4);
        assert_eq!(&text[span.start()..span.end()], "ü");
    }

    #[test]
    fn test_at_line_column_clamps_to_line_end() {
        let text = "{\n\"a\": 1\n}";
        let span = Span::at_line_column(text, 1, 9);
        assert_eq!(span, Span::new(1..2));
    }

    #[test]
    fn test_at_line_column_past_end() {
        let text = "{";
        let span = Span::at_line_column(text, 1, 5);
        assert_eq!(span, Span::new(1..1));
    }

    proptest! {
        #[test]
        fn prop_at_line_column_stays_in_bounds(
            text in "[a-zü{}\n ]{0,40}",
            line in 0usize..6,
            column in 0usize..50,
        ) {
            let span = Span::at_line_column(&text, line, column);
            prop_assert!(span.end() <= text.len());
            prop_assert!(text.is_char_boundary(span.start()));
        }
    }
}
