// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

/// The half-open byte range `[start, end)` of a match or a capture group
/// within the input.
///
/// A `Span` can also be used as a destination, in which case the offsets of
/// the corresponding capture group are stored instead of its content. The
/// usual trick is to wrap the whole expression in a group, e.g. `((\w+):(\d+))`,
/// and pass the span first, so that it receives the extent of the entire match.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Span {
    pub start: usize, // the position of the byte stream (value included)
    pub end: usize,   // the position of the byte stream (value excluded)
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    // the following methods are intended to
    // be compatible with the 'Match' API of crate 'regex':
    // https://docs.rs/regex/latest/regex/struct.Match.html

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        // a reversed span covers nothing
        self.end.saturating_sub(self.start)
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns the bytes covered by this span.
    ///
    /// The returned slice borrows from `input`, no copy is made.
    /// Returns `None` if the span is reversed or extends past the end
    /// of `input`.
    pub fn slice<'i>(&self, input: &'i [u8]) -> Option<&'i [u8]> {
        input.get(self.range())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Span;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(2, 5);
        assert_eq!(span.start(), 2);
        assert_eq!(span.end(), 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 2..5);

        // zero-length spans are valid, they are not "absent"
        let empty = Span::new(4, 4);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let reversed = Span::new(5, 2);
        assert_eq!(reversed.len(), 0);
        assert!(reversed.is_empty());
    }

    #[test]
    fn test_span_slice() {
        let input = b"host:1234";
        let span = Span::from(5..9);
        assert_eq!(span.slice(input), Some(&b"1234"[..]));

        // the slice aliases the input
        assert!(std::ptr::eq(
            span.slice(input).unwrap().as_ptr(),
            input[5..].as_ptr()
        ));

        assert_eq!(Span::default().slice(input), Some(&b""[..]));
        assert_eq!(Span::new(9, 9).slice(input), Some(&b""[..]));

        // reversed or past the end
        assert_eq!(Span::new(4, 2).slice(input), None);
        assert_eq!(Span::new(5, 10).slice(input), None);
    }
}
