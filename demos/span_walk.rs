// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex::bytes::Regex;
use regex_scan::{scan, Destinations, Span};

pub fn main() {
    // the outer group covers the whole match, so the span
    // tells where to continue scanning
    let re = Regex::new(r"((\w+):(\d+))").unwrap();
    let mut input: &[u8] = b"alpha:8080 beta:9090 gamma:7070";

    loop {
        let mut span = Span::default();
        let mut host = String::new();
        let mut port = 0u16;

        let result = scan(
            &re,
            input,
            &mut Destinations::new()
                .span(&mut span)
                .text(&mut host)
                .int(&mut port),
        );

        match result {
            Ok(()) => {
                println!("Found {}:{} at {:?}", host, port, span.range());
                input = &input[span.end..];
            }
            Err(e) if e.is_not_found() => break,
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }
}
