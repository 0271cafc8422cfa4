// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Combines regular expression matching with typed extraction of the
//! capture groups into caller-supplied destinations.
//!
//! e.g. the host and port portions of a URL:
//!
//! ```
//! use regex::bytes::Regex;
//! use regex_scan::{scan_str, Destination};
//!
//! let re = Regex::new(r"^https?://([^/:]+):(\d+)/").unwrap();
//! let mut host = String::new();
//! let mut port = 0u16;
//!
//! scan_str(
//!     &re,
//!     "http://example.com:8080/index.html",
//!     &mut [Destination::from(&mut host), Destination::from(&mut port)],
//! )
//! .unwrap();
//!
//! assert_eq!(host, "example.com");
//! assert_eq!(port, 8080);
//! ```

mod assign;
mod destination;
mod error;
mod matcher;
mod numberparser;
mod span;

pub use destination::{Callback, Destination, Destinations, FloatCell, IntCell};
pub use error::{CallbackError, ScanError};
pub use matcher::{Locations, Pattern};
pub use numberparser::Radix;
pub use span::Span;

/// Matches `pattern` against `input` and stores the capture groups into
/// `destinations`.
///
/// The n-th destination receives capture group n + 1 (the whole match is
/// never assigned), capture groups without a destination are ignored.
///
/// Fails with `ScanError::NotFound` if there is no match, and with
/// `ScanError::InsufficientMatches` (before any destination is written) if
/// the pattern has fewer groups than there are destinations. Otherwise the
/// destinations are processed in order and the first conversion error is
/// returned, destinations before it stay written.
///
/// A capture group that did not participate in the match is ignored by
/// `Destination::Discard`, passed as an empty slice to
/// `Destination::Callback`, and is an error (`ScanError::AbsentGroup`) for
/// every other destination.
///
/// A group span that is reversed or lies outside `input` (possible only
/// with a hand-written `Pattern`) fails with `ScanError::InvalidSpan`.
pub fn scan<'i, P>(
    pattern: &P,
    input: &'i [u8],
    destinations: &mut [Destination<'_, 'i>],
) -> Result<(), ScanError>
where
    P: Pattern + ?Sized,
{
    let locations = pattern.locate(input);
    assign::assign(
        pattern.as_text(),
        pattern.group_count(),
        input,
        locations,
        destinations,
    )
}

/// Same as `scan`, but matches against a string.
pub fn scan_str<'i, P>(
    pattern: &P,
    input: &'i str,
    destinations: &mut [Destination<'_, 'i>],
) -> Result<(), ScanError>
where
    P: Pattern + ?Sized,
{
    scan(pattern, input.as_bytes(), destinations)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regex::bytes::Regex;

    use crate::{scan, scan_str, Destination, Destinations, Locations, Pattern, ScanError, Span};

    #[test]
    fn test_scan_host_port() {
        let re = Regex::new(r"(\w+):(\d+)").unwrap();
        let mut host = String::new();
        let mut port = 0u32;

        scan(
            &re,
            b"host:1234x",
            &mut Destinations::new().text(&mut host).int(&mut port),
        )
        .unwrap();

        assert_eq!(host, "host");
        assert_eq!(port, 1234);
    }

    #[test]
    fn test_scan_not_found() {
        let re = Regex::new(r"(\w+):(\d+)").unwrap();
        let err = scan(&re, b"nomatch", &mut []).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            r#"regular expression "(\w+):(\d+)": not found"#
        );
    }

    #[test]
    fn test_scan_discard_all() {
        let re = Regex::new(r"^(\w+):(\d+)$").unwrap();
        assert!(scan(
            &re,
            b"host:1234",
            &mut [Destination::Discard, Destination::Discard]
        )
        .is_ok());
    }

    #[test]
    fn test_scan_out_of_range() {
        let re = Regex::new(r"(.*)").unwrap();
        let mut value = 0u8;
        let err = scan(&re, b"256", &mut [Destination::from(&mut value)]).unwrap_err();

        assert!(matches!(err, ScanError::OutOfRange { kind: "u8", .. }));
        assert_eq!(
            err.to_string(),
            r#"scan: destination 0: parsing "256": out of range for u8"#
        );
    }

    #[test]
    fn test_scan_absent_group_not_discarded() {
        let re = Regex::new(r"(\w+):((\d+))?").unwrap();
        let mut host = String::new();
        let mut port = 0u32;

        let err = scan(
            &re,
            b"host:",
            &mut Destinations::new()
                .text(&mut host)
                .discard()
                .int(&mut port),
        )
        .unwrap_err();

        assert!(matches!(err, ScanError::AbsentGroup { position: 2 }));
        assert_eq!(host, "host");
    }

    #[test]
    fn test_scan_str() {
        let re = Regex::new(r"((\w+):(\d+))").unwrap();
        let text = String::from("connect to db:5432 now");
        let mut span = Span::default();
        let mut host: &[u8] = b"";
        let mut port = 0u16;

        scan_str(
            &re,
            &text,
            &mut Destinations::new()
                .span(&mut span)
                .bytes(&mut host)
                .decimal(&mut port),
        )
        .unwrap();

        assert_eq!(span, Span::new(11, 18));
        assert_eq!(host, b"db");
        assert_eq!(port, 5432);
    }

    #[test]
    fn test_scan_with_trait_object() {
        let re = Regex::new(r"(\d+)").unwrap();
        let pattern: &dyn crate::Pattern = &re;
        let mut value = 0i32;

        scan(pattern, b"-> 42", &mut [Destination::from(&mut value)]).unwrap();
        assert_eq!(value, 42);
    }

    struct FixedPattern {
        group_count: usize,
        locations: Locations,
    }

    impl Pattern for FixedPattern {
        fn group_count(&self) -> usize {
            self.group_count
        }

        fn locate(&self, _input: &[u8]) -> Option<Locations> {
            Some(self.locations.clone())
        }

        fn as_text(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_scan_arity_from_pattern() {
        // the match reports more groups than the pattern declares
        let pattern = FixedPattern {
            group_count: 1,
            locations: Locations::new(vec![
                Some(Span::new(0, 3)),
                Some(Span::new(0, 1)),
                Some(Span::new(2, 3)),
            ]),
        };
        let mut first = String::new();
        let mut second = String::new();

        let err = scan(
            &pattern,
            b"a:b",
            &mut Destinations::new().text(&mut first).text(&mut second),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"scan: only got 1 matches from "fixed"; need at least 2"#
        );
        assert_eq!(first, "");
    }

    #[test]
    fn test_scan_invalid_span() {
        let pattern = FixedPattern {
            group_count: 1,
            locations: Locations::new(vec![Some(Span::new(0, 3)), Some(Span::new(2, 8))]),
        };
        let mut text = String::new();

        let err = scan(&pattern, b"a:b", &mut [Destination::from(&mut text)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "scan: destination 0: capture group 1 has invalid span 2..8"
        );
        assert_eq!(text, "");
    }
}
