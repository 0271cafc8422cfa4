// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex::bytes::Regex;
use regex_scan::{scan_str, Destinations};

#[derive(Debug, Default)]
struct Entry {
    mode: String,
    nlinks: i64,
    user: String,
    group: String,
    size: i64,
    date: String,
    name: String,
}

pub fn main() {
    // matches a line of simplified `ls -l` output
    let re = Regex::new(r"^(.{10}) +(\d+) +(\w+) +(\w+) +(\d+) +(\S+) +(\S+)").unwrap();
    let line = "-rwxr-xr-x 1 root root 110080 2014-03-24  /bin/ls";

    let mut entry = Entry::default();
    let result = scan_str(
        &re,
        line,
        &mut Destinations::new()
            .text(&mut entry.mode)
            .int(&mut entry.nlinks)
            .text(&mut entry.user)
            .text(&mut entry.group)
            .int(&mut entry.size)
            .text(&mut entry.date)
            .text(&mut entry.name),
    );

    match result {
        Ok(()) => println!("{:?}", entry),
        Err(e) => println!("Error: {}", e),
    }
}
