// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::str::FromStr;

/// How the digits of an integer literal are interpreted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Radix {
    /// The base is taken from the prefix: `0x` hexadecimal, `0o` octal,
    /// `0b` binary, a leading `0` octal, otherwise decimal.
    #[default]
    Prefixed,

    /// Base 10 only, leading zeros are ordinary digits and prefixes
    /// are rejected.
    Decimal,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberError {
    Syntax(&'static str),
    Range,
}

const INVALID_SYNTAX: &str = "invalid syntax";

/// Parses an integer literal into an `i128`.
///
/// A sign (`+` or `-`) is only accepted when `signed` is true. A literal
/// whose magnitude exceeds 128 bits is reported as `NumberError::Range`,
/// syntax errors take precedence over range errors.
pub fn parse_integer(text: &[u8], radix: Radix, signed: bool) -> Result<i128, NumberError> {
    let (negative, unsigned_text) = match text.first() {
        Some(b'-') if signed => (true, &text[1..]),
        Some(b'+') if signed => (false, &text[1..]),
        _ => (false, text),
    };

    let (base, digits) = match radix {
        Radix::Decimal => (10, unsigned_text),
        Radix::Prefixed => split_base_prefix(unsigned_text),
    };

    if digits.is_empty() {
        return Err(NumberError::Syntax(INVALID_SYNTAX));
    }

    let mut magnitude: Option<u128> = Some(0);
    for byte in digits {
        let digit = match (*byte as char).to_digit(base) {
            Some(d) => d as u128,
            None => return Err(NumberError::Syntax(INVALID_SYNTAX)),
        };

        // keep validating the remaining digits after an overflow
        magnitude = magnitude
            .and_then(|m| m.checked_mul(base as u128))
            .and_then(|m| m.checked_add(digit));
    }

    let magnitude = magnitude.ok_or(NumberError::Range)?;

    if negative {
        if magnitude == i128::MIN.unsigned_abs() {
            Ok(i128::MIN)
        } else {
            i128::try_from(magnitude)
                .map(|m| -m)
                .map_err(|_| NumberError::Range)
        }
    } else {
        i128::try_from(magnitude).map_err(|_| NumberError::Range)
    }
}

fn split_base_prefix(text: &[u8]) -> (u32, &[u8]) {
    match text {
        [b'0', b'x' | b'X', rest @ ..] => (16, rest),
        [b'0', b'o' | b'O', rest @ ..] => (8, rest),
        [b'0', b'b' | b'B', rest @ ..] => (2, rest),
        [b'0', rest @ ..] if !rest.is_empty() => (8, rest),
        _ => (10, text),
    }
}

/// Parses a decimal or exponential floating literal at the precision of `F`.
///
/// A finite literal that rounds to infinity at that precision is rejected,
/// the literals `inf`, `infinity` and `nan` are accepted.
pub fn parse_float<F>(text: &[u8]) -> Result<F, NumberError>
where
    F: FromStr + FloatValue,
{
    let s = std::str::from_utf8(text).map_err(|_| NumberError::Syntax(INVALID_SYNTAX))?;
    let value = s
        .parse::<F>()
        .map_err(|_| NumberError::Syntax(INVALID_SYNTAX))?;

    if value.is_infinite_value() && !is_infinity_literal(s) {
        return Err(NumberError::Syntax("value out of range"));
    }

    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub trait FloatValue: Copy {
    fn is_infinite_value(&self) -> bool;
}

impl FloatValue for f32 {
    fn is_infinite_value(&self) -> bool {
        self.is_infinite()
    }
}

impl FloatValue for f64 {
    fn is_infinite_value(&self) -> bool {
        self.is_infinite()
    }
}

/// Recognizes `0`, `1` and the case-insensitive words `true` and `false`.
pub fn parse_bool(text: &[u8]) -> Option<bool> {
    match text {
        b"1" => Some(true),
        b"0" => Some(false),
        _ if text.eq_ignore_ascii_case(b"true") => Some(true),
        _ if text.eq_ignore_ascii_case(b"false") => Some(false),
        _ => None,
    }
}
