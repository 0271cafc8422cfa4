// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::time::Duration;

use regex::bytes::Regex;
use regex_scan::{scan_str, Destination};

pub fn main() {
    binary_number();
    duration();
}

fn binary_number() {
    // parse a number in base 2
    let re = Regex::new(r"([01]+)").unwrap();
    let mut number = 0u64;

    let result = scan_str(
        &re,
        "1001",
        &mut [Destination::callback(|bytes: &[u8]| {
            let text = std::str::from_utf8(bytes)?;
            number = u64::from_str_radix(text, 2)?;
            Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
        })],
    );

    match result {
        Ok(()) => println!("Binary number: {}", number),
        Err(e) => println!("Error: {}", e),
    }
}

/// A reusable callback that stores a duration written as `<n>ms`, `<n>s` or `<n>m`.
fn parse_duration<'d>(cell: &'d mut Duration) -> Destination<'d, 'd> {
    Destination::callback(move |bytes: &[u8]| {
        let text = std::str::from_utf8(bytes)?;
        let (digits, unit) = text
            .find(|c: char| !c.is_ascii_digit())
            .map(|idx| text.split_at(idx))
            .ok_or("missing unit")?;
        let value: u64 = digits.parse()?;

        *cell = match unit {
            "ms" => Duration::from_millis(value),
            "s" => Duration::from_secs(value),
            "m" => Duration::from_secs(value.checked_mul(60).ok_or("duration too large")?),
            _ => return Err(format!("unknown unit \"{}\"", unit).into()),
        };
        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
}

fn duration() {
    let re = Regex::new(r"timeout=(\w+) retry=(\w+)").unwrap();
    let mut timeout = Duration::ZERO;
    let mut retry = Duration::ZERO;

    let result = scan_str(
        &re,
        "timeout=1500ms retry=2m",
        &mut [parse_duration(&mut timeout), parse_duration(&mut retry)],
    );

    match result {
        Ok(()) => println!("Timeout: {:?}, retry: {:?}", timeout, retry),
        Err(e) => println!("Error: {}", e),
    }
}
