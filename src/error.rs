// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

/// The error type a callback destination returns on failure.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Errors reported by `scan`.
///
/// `position` is the 0-based index of the destination that failed,
/// which corresponds to capture group `position + 1`.
#[derive(Debug)]
pub enum ScanError {
    /// The pattern does not match anywhere in the input.
    NotFound { pattern: String },

    /// The pattern has fewer capture groups than the requested destinations.
    InsufficientMatches {
        pattern: String,
        available: usize,
        requested: usize,
    },

    /// The capture group did not participate in the match, and the
    /// destination is neither a discard marker nor a callback.
    AbsentGroup { position: usize },

    /// The pattern reported a group span that is reversed or lies outside
    /// the input.
    InvalidSpan {
        position: usize,
        start: usize,
        end: usize,
    },

    /// A text destination received bytes that are not valid UTF-8.
    InvalidText { position: usize, text: Vec<u8> },

    InvalidBoolean { position: usize, text: Vec<u8> },

    InvalidNumber {
        position: usize,
        text: Vec<u8>,
        reason: &'static str,
    },

    /// The literal is well-formed but does not fit the destination,
    /// `kind` names the destination type, e.g. "u8".
    OutOfRange {
        position: usize,
        text: Vec<u8>,
        kind: &'static str,
    },

    /// A dynamically typed destination holds a type that cannot be scanned into.
    UnsupportedDestinationType {
        position: usize,
        type_name: &'static str,
    },

    /// A callback destination reported failure.
    Callback {
        position: usize,
        source: CallbackError,
    },
}

impl ScanError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScanError::NotFound { .. })
    }

    /// The index of the failed destination, `None` for errors that
    /// concern the whole match.
    pub fn position(&self) -> Option<usize> {
        match self {
            ScanError::NotFound { .. } | ScanError::InsufficientMatches { .. } => None,
            ScanError::AbsentGroup { position }
            | ScanError::InvalidSpan { position, .. }
            | ScanError::InvalidText { position, .. }
            | ScanError::InvalidBoolean { position, .. }
            | ScanError::InvalidNumber { position, .. }
            | ScanError::OutOfRange { position, .. }
            | ScanError::UnsupportedDestinationType { position, .. }
            | ScanError::Callback { position, .. } => Some(*position),
        }
    }

    /// Returns the callback's own error if this error came from a callback
    /// destination, otherwise gives the error back unchanged.
    pub fn into_callback_error(self) -> Result<CallbackError, ScanError> {
        match self {
            ScanError::Callback { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotFound { pattern } => {
                write!(f, "regular expression \"{}\": not found", pattern)
            }
            ScanError::InsufficientMatches {
                pattern,
                available,
                requested,
            } => write!(
                f,
                "scan: only got {} matches from \"{}\"; need at least {}",
                available, pattern, requested
            ),
            ScanError::AbsentGroup { position } => write!(
                f,
                "scan: destination {}: capture group {} did not participate in the match",
                position,
                position + 1
            ),
            ScanError::InvalidSpan {
                position,
                start,
                end,
            } => write!(
                f,
                "scan: destination {}: capture group {} has invalid span {}..{}",
                position,
                position + 1,
                start,
                end
            ),
            ScanError::InvalidText { position, text } => {
                write_parse_error(f, *position, text, "invalid UTF-8")
            }
            ScanError::InvalidBoolean { position, text } => {
                write_parse_error(f, *position, text, "invalid boolean")
            }
            ScanError::InvalidNumber {
                position,
                text,
                reason,
            } => write_parse_error(f, *position, text, reason),
            ScanError::OutOfRange {
                position,
                text,
                kind,
            } => write_parse_error(f, *position, text, &format!("out of range for {}", kind)),
            ScanError::UnsupportedDestinationType {
                position,
                type_name,
            } => write!(
                f,
                "scan: destination {}: unsupported type {}",
                position, type_name
            ),
            ScanError::Callback { position, source } => {
                write!(f, "scan: destination {}: {}", position, source)
            }
        }
    }
}

fn write_parse_error(
    f: &mut fmt::Formatter<'_>,
    position: usize,
    text: &[u8],
    explanation: &str,
) -> fmt::Result {
    write!(
        f,
        "scan: destination {}: parsing \"{}\": {}",
        position,
        String::from_utf8_lossy(text),
        explanation
    )
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Callback { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
