// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use proptest::prelude::*;
use regex::bytes::Regex;
use regex_scan::{scan, Destination, ScanError};

fn whole() -> Regex {
    Regex::new("(.*)").unwrap()
}

/// Scans `text` into a fresh `T` cell.
fn scan_into<T>(text: &[u8]) -> Result<T, ScanError>
where
    T: Default,
    for<'d, 'i> Destination<'d, 'i>: From<&'d mut T>,
{
    let mut value = T::default();
    scan(&whole(), text, &mut [Destination::from(&mut value)])?;
    Ok(value)
}

fn is_out_of_range<T>(text: String) -> bool
where
    T: Default,
    for<'d, 'i> Destination<'d, 'i>: From<&'d mut T>,
{
    matches!(
        scan_into::<T>(text.as_bytes()),
        Err(ScanError::OutOfRange { .. })
    )
}

macro_rules! round_trip_props {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            mod $name {
                use super::*;

                proptest! {
                    #[test]
                    fn decimal_text_round_trips(value in any::<$ty>()) {
                        prop_assert_eq!(scan_into::<$ty>(value.to_string().as_bytes()).unwrap(), value);
                    }
                }

                #[test]
                fn one_past_the_range_fails() {
                    let above = (<$ty>::MAX as i128 + 1).to_string();
                    let below = (<$ty>::MIN as i128 - 1).to_string();
                    assert!(is_out_of_range::<$ty>(above));

                    // a minus sign is a syntax error for unsigned cells
                    if <$ty>::MIN == 0 {
                        assert!(matches!(
                            scan_into::<$ty>(below.as_bytes()),
                            Err(ScanError::InvalidNumber { .. })
                        ));
                    } else {
                        assert!(is_out_of_range::<$ty>(below));
                    }
                }
            }
        )*
    };
}

round_trip_props!(
    int_i8: i8,
    int_i16: i16,
    int_i32: i32,
    int_i64: i64,
    int_isize: isize,
    int_u8: u8,
    int_u16: u16,
    int_u32: u32,
    int_u64: u64,
    int_usize: usize,
);

fn is_bool_literal(text: &str) -> bool {
    text == "0"
        || text == "1"
        || text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("false")
}

proptest! {
    #[test]
    fn bool_literal_set(text in prop_oneof![
        Just("true".to_owned()),
        Just("FaLsE".to_owned()),
        "[01tfrueals]{0,6}",
        "\\PC{0,8}",
    ]) {
        let result = scan_into::<bool>(text.as_bytes());
        if is_bool_literal(&text) {
            prop_assert!(result.is_ok());
        } else {
            let is_invalid_boolean = matches!(result, Err(ScanError::InvalidBoolean { .. }));
            prop_assert!(is_invalid_boolean);
        }
    }

    #[test]
    fn arity(groups in 0usize..6, requested in 0usize..8) {
        let pattern = Regex::new(&"(a)".repeat(groups)).unwrap();
        let input = "a".repeat(groups);

        let mut cells = vec![String::from("untouched"); requested];
        let mut destinations: Vec<Destination> =
            cells.iter_mut().map(Destination::from).collect();
        let result = scan(&pattern, input.as_bytes(), &mut destinations);
        drop(destinations);

        if requested > groups {
            let is_insufficient = matches!(
                result,
                Err(ScanError::InsufficientMatches { available, requested: r, .. })
                    if available == groups && r == requested
            );
            prop_assert!(is_insufficient);
            prop_assert!(cells.iter().all(|cell| cell == "untouched"));
        } else {
            prop_assert!(result.is_ok());
            prop_assert!(cells.iter().all(|cell| cell == "a"));
        }
    }

    #[test]
    fn discard_transparency(discarded in proptest::collection::vec(any::<bool>(), 3)) {
        // the second group never participates in the match
        let pattern = Regex::new(r"(\d+)(x)?(\w+)").unwrap();

        let mut number = 0u32;
        let mut absent = String::new();
        let mut word = String::new();

        let mut destinations = vec![
            if discarded[0] { Destination::Discard } else { Destination::from(&mut number) },
            if discarded[1] { Destination::Discard } else { Destination::from(&mut absent) },
            if discarded[2] { Destination::Discard } else { Destination::from(&mut word) },
        ];
        let result = scan(&pattern, b"42abc", &mut destinations);
        drop(destinations);

        if discarded[1] {
            prop_assert!(result.is_ok());
        } else {
            let is_absent = matches!(result, Err(ScanError::AbsentGroup { position: 1 }));
            prop_assert!(is_absent);
        }
        if !discarded[0] {
            prop_assert_eq!(number, 42);
        }
        if !discarded[2] && discarded[1] {
            prop_assert_eq!(word.as_str(), "abc");
        }
    }
}
