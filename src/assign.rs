// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    destination::{resolve_dynamic, Destination, FloatCell},
    error::ScanError,
    matcher::Locations,
    numberparser::{parse_bool, parse_float, parse_integer, NumberError},
    span::Span,
};

/// Stores the capture groups of `locations` into `destinations`, in order.
///
/// `pattern_text` is only used for error messages. `group_count` is the
/// number of capture groups the pattern declares, the arity is checked
/// against it before any destination is touched. Processing stops at the
/// first failure, destinations written before it keep their new values.
pub fn assign<'i>(
    pattern_text: &str,
    group_count: usize,
    input: &'i [u8],
    locations: Option<Locations>,
    destinations: &mut [Destination<'_, 'i>],
) -> Result<(), ScanError> {
    let locations = locations.ok_or_else(|| ScanError::NotFound {
        pattern: pattern_text.to_owned(),
    })?;

    if group_count < destinations.len() {
        return Err(ScanError::InsufficientMatches {
            pattern: pattern_text.to_owned(),
            available: group_count,
            requested: destinations.len(),
        });
    }

    // extra groups without a destination are ignored, groups missing
    // from `locations` count as absent
    for (position, destination) in destinations.iter_mut().enumerate() {
        assign_one(destination, position, input, locations.get(position + 1))?;
    }

    Ok(())
}

fn assign_one<'i>(
    destination: &mut Destination<'_, 'i>,
    position: usize,
    input: &'i [u8],
    span: Option<Span>,
) -> Result<(), ScanError> {
    let span = match destination {
        Destination::Discard => return Ok(()),
        Destination::Callback(callback) => {
            let bytes = match span {
                Some(span) => group_bytes(input, position, span)?,
                None => &input[..0],
            };
            return callback(bytes).map_err(|source| ScanError::Callback { position, source });
        }
        Destination::Dynamic { cell, type_name } => {
            let mut resolved = resolve_dynamic(&mut **cell).ok_or(
                ScanError::UnsupportedDestinationType {
                    position,
                    type_name: *type_name,
                },
            )?;
            return assign_one(&mut resolved, position, input, span);
        }
        _ => span.ok_or(ScanError::AbsentGroup { position })?,
    };

    let bytes = group_bytes(input, position, span)?;

    match destination {
        Destination::Text(cell) => {
            let text = std::str::from_utf8(bytes).map_err(|_| ScanError::InvalidText {
                position,
                text: bytes.to_vec(),
            })?;
            cell.clear();
            cell.push_str(text);
        }
        Destination::Bytes(cell) => {
            **cell = bytes;
        }
        Destination::Bool(cell) => {
            **cell = parse_bool(bytes).ok_or_else(|| ScanError::InvalidBoolean {
                position,
                text: bytes.to_vec(),
            })?;
        }
        Destination::Int(cell, radix) => {
            let kind = cell.kind();
            parse_integer(bytes, *radix, cell.is_signed())
                .and_then(|value| cell.store(value))
                .map_err(|e| number_error(e, position, bytes, kind))?;
        }
        Destination::Float(FloatCell::F32(cell)) => {
            **cell = parse_float(bytes).map_err(|e| number_error(e, position, bytes, "f32"))?;
        }
        Destination::Float(FloatCell::F64(cell)) => {
            **cell = parse_float(bytes).map_err(|e| number_error(e, position, bytes, "f64"))?;
        }
        Destination::Span(cell) => {
            **cell = span;
        }
        // returned early above
        Destination::Discard | Destination::Callback(_) | Destination::Dynamic { .. } => {}
    }

    Ok(())
}

fn group_bytes(input: &[u8], position: usize, span: Span) -> Result<&[u8], ScanError> {
    span.slice(input).ok_or(ScanError::InvalidSpan {
        position,
        start: span.start,
        end: span.end,
    })
}

fn number_error(e: NumberError, position: usize, bytes: &[u8], kind: &'static str) -> ScanError {
    match e {
        NumberError::Syntax(reason) => ScanError::InvalidNumber {
            position,
            text: bytes.to_vec(),
            reason,
        },
        NumberError::Range => ScanError::OutOfRange {
            position,
            text: bytes.to_vec(),
            kind,
        },
    }
}
