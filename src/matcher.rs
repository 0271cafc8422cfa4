// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Index;

use crate::span::Span;

/// A compiled expression that can locate the leftmost match in a byte
/// sequence and report the offsets of every capture group.
///
/// Implementations must not keep per-call state, a single pattern
/// is shared by any number of scans (possibly from several threads).
pub trait Pattern {
    /// The number of capture groups, not counting the whole match (group 0).
    ///
    /// Scanning checks the number of destinations against this value.
    fn group_count(&self) -> usize;

    /// Finds the leftmost match in `input`.
    ///
    /// Returns `None` when there is no match. Every span must satisfy
    /// `start <= end <= input.len()`, scanning reports a span that does not
    /// as `ScanError::InvalidSpan`.
    fn locate(&self, input: &[u8]) -> Option<Locations>;

    /// The source text of the expression, used in error messages.
    fn as_text(&self) -> &str;
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn group_count(&self) -> usize {
        (**self).group_count()
    }

    fn locate(&self, input: &[u8]) -> Option<Locations> {
        (**self).locate(input)
    }

    fn as_text(&self) -> &str {
        (**self).as_text()
    }
}

impl Pattern for regex::bytes::Regex {
    fn group_count(&self) -> usize {
        // `captures_len` includes the implicit whole-match group
        self.captures_len() - 1
    }

    fn locate(&self, input: &[u8]) -> Option<Locations> {
        let mut capture_locations = self.capture_locations();
        self.captures_read(&mut capture_locations, input)?;

        let spans = (0..capture_locations.len())
            .map(|idx| {
                capture_locations
                    .get(idx)
                    .map(|(start, end)| Span::new(start, end))
            })
            .collect();

        Some(Locations { spans })
    }

    fn as_text(&self) -> &str {
        self.as_str()
    }
}

/// The offsets of one match: index 0 is the whole match, index `n` is the
/// n-th capture group in declaration order.
///
/// `None` marks a group that did not participate in the match, which is
/// different from a group that matched an empty string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Locations {
    spans: Vec<Option<Span>>,
}

impl Locations {
    pub fn new(spans: Vec<Option<Span>>) -> Self {
        Locations { spans }
    }

    /// The span of the entire match.
    pub fn whole(&self) -> Option<Span> {
        self.get(0)
    }

    /// The span of group `index`, `None` if the group is absent
    /// or out of range.
    pub fn get(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied().flatten()
    }

    /// The number of capture groups available for assignment,
    /// i.e. excluding the whole match.
    pub fn group_count(&self) -> usize {
        self.spans.len().saturating_sub(1)
    }

    /// Iterates over the capture groups (excluding the whole match).
    pub fn groups(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.spans.iter().skip(1).copied()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl Index<usize> for Locations {
    type Output = Option<Span>;

    fn index(&self, index: usize) -> &Self::Output {
        self.spans.get(index).unwrap_or_else(|| {
            panic!(
                "Index {} is out of range of the capture group and the length of capture groups is {}.",
                index,
                self.len()
            )
        })
    }
}
