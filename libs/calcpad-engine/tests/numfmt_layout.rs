//! Display formatting tests
//!
//! Checks the number-to-text policy used for every computed value:
//! - Integers without a fractional part
//! - Shortest round-trip decimals
//! - Exponent notation thresholds
//! - Non-finite values

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use calcpad_engine::numfmt::{format_number, parse_display};

#[test]
fn test_common_results() {
    let test_cases = [
        (8.0, "8"),
        (10.0, "10"),
        (-3.0, "-3"),
        (0.5, "0.5"),
        (2.5, "2.5"),
        (-123.456, "-123.456"),
        (1024.0, "1024"),
        (0.15, "0.15"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(format_number(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_shortest_round_trip() {
    assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
}

#[test]
fn test_large_values() {
    assert_eq!(format_number(123_456_789.0), "123456789");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(1.5e22), "1.5e+22");
    assert_eq!(format_number(-2e300), "-2e+300");
    assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
}

#[test]
fn test_small_values() {
    assert_eq!(format_number(0.001), "0.001");
    assert_eq!(format_number(0.000001), "0.000001");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1.5e-7), "1.5e-7");
    assert_eq!(format_number(-2.5e-10), "-2.5e-10");
}

#[test]
fn test_non_finite_values() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_formatted_values_parse_back() {
    let values = [0.0, 1.0, -7.25, 0.1 + 0.2, 1e21, 1.5e-7, 123_456.789, f64::MIN_POSITIVE];

    for value in values {
        let text = format_number(value);
        assert_eq!(parse_display(&text), value, "Round trip failed for {}", text);
    }
}
