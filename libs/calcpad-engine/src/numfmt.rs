//! Display number formatting
//!
//! The calculator shows every computed value as text. Formatting follows the
//! ECMAScript `Number::toString` layout on top of the shortest round-trip
//! digits produced by `ryu`, so a value prints the same on every platform:
//!
//! | Value | Display |
//! |-------|---------|
//! | `8.0` | `8` |
//! | `0.1 + 0.2` | `0.30000000000000004` |
//! | `-0.0` | `0` |
//! | `1e21` | `1e+21` |
//! | `1.5e-7` | `1.5e-7` |
//! | `0.0 / 0.0` | `NaN` |
//! | `1.0 / 0.0` | `Infinity` |
//!
//! # Usage
//!
//! ```rust
//! use calcpad_engine::numfmt::{format_number, parse_display};
//!
//! assert_eq!(format_number(5.0 + 3.0), "8");
//! assert_eq!(format_number(2.5), "2.5");
//! assert_eq!(parse_display("5."), 5.0);
//! ```

/// Largest decimal exponent printed without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest (exclusive) decimal exponent printed without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Format a value for the calculator display
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, exponent) = decompose(buffer.format_finite(value.abs()));

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    layout(&mut out, &digits, exponent);
    out
}

/// Split `ryu` output into significant digits and a decimal exponent `n`
/// such that the value equals `0.d1d2...dk * 10^n`.
///
/// Leading and trailing zeros are stripped, so `"0.0012"` becomes `("12", -2)`
/// and `"1.5e-7"` becomes `("15", -6)`.
fn decompose(shortest: &str) -> (String, i32) {
    let (mantissa, exp) = match shortest.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mut point = int_part.len() as i32 + exp;

    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    point -= leading as i32;

    let significant = digits.trim_end_matches('0').len();
    digits.truncate(significant);

    (digits, point)
}

fn layout(out: &mut String, digits: &str, n: i32) {
    let k = digits.len() as i32;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        // Integer: digits followed by zeros
        out.push_str(digits);
        push_zeros(out, n - k);
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        out.push_str("0.");
        push_zeros(out, -n);
        out.push_str(digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(e.unsigned_abs()));
    }
}

fn push_zeros(out: &mut String, count: i32) {
    for _ in 0..count {
        out.push('0');
    }
}

/// Parse display text back into a value
///
/// Accepts everything the display can hold: digit entry in progress (`"5."`),
/// formatted results (`"1e+21"`), and non-finite markers. Unparseable text
/// yields `NaN`.
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => text
            .strip_suffix('.')
            .unwrap_or(text)
            .parse::<f64>()
            .unwrap_or(f64::NAN),
    }
}
