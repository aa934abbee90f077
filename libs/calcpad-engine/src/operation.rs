//! Typed calculator input
//!
//! Keys arrive as `Action`s. Binary operators and scientific functions are
//! separate enums so the engine can never hold a unary function as its
//! pending operator.

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(CalcError::InvalidDigit(c))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value).ok_or(CalcError::InvalidDigit(char::from(value)))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Power => "^",
        }
    }

    /// Apply the operator to `a` and `b`
    ///
    /// Division by zero yields `NaN` rather than an infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            },
            BinaryOp::Power => a.powf(b),
        }
    }
}

/// Resolve a binary operation; with no operator the right operand passes through
pub fn calculate(a: f64, b: f64, op: Option<BinaryOp>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(BinaryOp::Add),
            "-" | "−" => Ok(BinaryOp::Subtract),
            "*" | "x" | "×" => Ok(BinaryOp::Multiply),
            "/" | "÷" => Ok(BinaryOp::Divide),
            "^" | "**" => Ok(BinaryOp::Power),
            other => Err(CalcError::unknown_operator(other)),
        }
    }
}

/// Unary scientific function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    Sqrt,
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
}

impl ScientificFn {
    pub const ALL: [ScientificFn; 6] = [
        ScientificFn::Sqrt,
        ScientificFn::Sin,
        ScientificFn::Cos,
        ScientificFn::Tan,
        ScientificFn::Log,
        ScientificFn::Ln,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScientificFn::Sqrt => "sqrt",
            ScientificFn::Sin => "sin",
            ScientificFn::Cos => "cos",
            ScientificFn::Tan => "tan",
            ScientificFn::Log => "log",
            ScientificFn::Ln => "ln",
        }
    }

    /// Apply the function. Trigonometric functions take degrees.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ScientificFn::Sqrt => value.sqrt(),
            ScientificFn::Sin => degrees_to_radians(value).sin(),
            ScientificFn::Cos => degrees_to_radians(value).cos(),
            ScientificFn::Tan => degrees_to_radians(value).tan(),
            ScientificFn::Log => value.log10(),
            ScientificFn::Ln => value.ln(),
        }
    }

    /// History expression for applying the function to `operand`
    ///
    /// e.g. `sqrt(9)`, `sin(30°)`, `log10(100)`
    pub fn describe(self, operand: &str) -> String {
        match self {
            ScientificFn::Sqrt => format!("sqrt({})", operand),
            ScientificFn::Sin => format!("sin({}°)", operand),
            ScientificFn::Cos => format!("cos({}°)", operand),
            ScientificFn::Tan => format!("tan({}°)", operand),
            ScientificFn::Log => format!("log10({})", operand),
            ScientificFn::Ln => format!("ln({})", operand),
        }
    }
}

/// `value * PI / 180`, multiplied before dividing
fn degrees_to_radians(value: f64) -> f64 {
    value * std::f64::consts::PI / 180.0
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScientificFn {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqrt" | "√" => Ok(ScientificFn::Sqrt),
            "sin" => Ok(ScientificFn::Sin),
            "cos" => Ok(ScientificFn::Cos),
            "tan" => Ok(ScientificFn::Tan),
            "log" | "log10" => Ok(ScientificFn::Log),
            "ln" => Ok(ScientificFn::Ln),
            _ => Err(CalcError::unknown_function(s)),
        }
    }
}

/// Discrete input event accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(Digit),
    Dot,
    ToggleSign,
    Percent,
    ClearAll,
    ClearEntry,
    Operation(BinaryOp),
    Equals,
    Scientific(ScientificFn),
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Action::Digit(digit)
    }
}

impl From<BinaryOp> for Action {
    fn from(op: BinaryOp) -> Self {
        Action::Operation(op)
    }
}

impl From<ScientificFn> for Action {
    fn from(func: ScientificFn) -> Self {
        Action::Scientific(func)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Digit(d) => write!(f, "{}", d),
            Action::Dot => f.write_str("."),
            Action::ToggleSign => f.write_str("+/-"),
            Action::Percent => f.write_str("%"),
            Action::ClearAll => f.write_str("c"),
            Action::ClearEntry => f.write_str("ce"),
            Action::Operation(op) => write!(f, "{}", op),
            Action::Equals => f.write_str("="),
            Action::Scientific(func) => write!(f, "{}", func),
        }
    }
}

impl FromStr for Action {
    type Err = CalcError;

    /// Parse a single key: a digit, `.`, `+/-`, `%`, `=`, a clear key, an
    /// operator symbol or a scientific function name
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Digit::try_from(c).map(Action::Digit);
            }
        }

        match key.to_ascii_lowercase().as_str() {
            "." | "," => return Ok(Action::Dot),
            "+/-" | "±" | "neg" => return Ok(Action::ToggleSign),
            "%" => return Ok(Action::Percent),
            "c" | "ac" | "clear" => return Ok(Action::ClearAll),
            "ce" => return Ok(Action::ClearEntry),
            "=" | "enter" => return Ok(Action::Equals),
            _ => {},
        }

        if let Ok(op) = key.parse::<BinaryOp>() {
            return Ok(Action::Operation(op));
        }
        if let Ok(func) = key.parse::<ScientificFn>() {
            return Ok(Action::Scientific(func));
        }
        Err(CalcError::unknown_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_conversion() {
        assert_eq!(Digit::try_from('7').map(Digit::value), Ok(7));
        assert_eq!(Digit::try_from('a'), Err(CalcError::InvalidDigit('a')));
        assert!(Digit::try_from(10u8).is_err());
        assert_eq!(Digit::new(3).map(Digit::as_char), Some('3'));
    }

    #[test]
    fn test_calculate_table() {
        assert_eq!(calculate(5.0, 3.0, Some(BinaryOp::Add)), 8.0);
        assert_eq!(calculate(5.0, 3.0, Some(BinaryOp::Subtract)), 2.0);
        assert_eq!(calculate(5.0, 3.0, Some(BinaryOp::Multiply)), 15.0);
        assert_eq!(calculate(6.0, 3.0, Some(BinaryOp::Divide)), 2.0);
        assert_eq!(calculate(2.0, 10.0, Some(BinaryOp::Power)), 1024.0);
        assert_eq!(calculate(5.0, 3.0, None), 3.0);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(calculate(5.0, 0.0, Some(BinaryOp::Divide)).is_nan());
        assert!(calculate(0.0, 0.0, Some(BinaryOp::Divide)).is_nan());
        assert!(calculate(5.0, -0.0, Some(BinaryOp::Divide)).is_nan());
    }

    #[test]
    fn test_scientific_degrees() {
        assert!((ScientificFn::Sin.apply(30.0) - 0.5).abs() < 1e-12);
        assert!((ScientificFn::Cos.apply(60.0) - 0.5).abs() < 1e-12);
        assert!((ScientificFn::Tan.apply(45.0) - 1.0).abs() < 1e-12);
        assert_eq!(ScientificFn::Sqrt.apply(9.0), 3.0);
        assert!((ScientificFn::Log.apply(1000.0) - 3.0).abs() < 1e-12);
        assert_eq!(ScientificFn::Ln.apply(1.0), 0.0);
        assert!(ScientificFn::Sqrt.apply(-4.0).is_nan());
        assert_eq!(ScientificFn::Log.apply(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_describe() {
        assert_eq!(ScientificFn::Sqrt.describe("9"), "sqrt(9)");
        assert_eq!(ScientificFn::Sin.describe("30"), "sin(30°)");
        assert_eq!(ScientificFn::Log.describe("100"), "log10(100)");
        assert_eq!(ScientificFn::Ln.describe("1"), "ln(1)");
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("5".parse::<Action>(), Ok(Action::Digit(Digit(5))));
        assert_eq!(".".parse::<Action>(), Ok(Action::Dot));
        assert_eq!("+/-".parse::<Action>(), Ok(Action::ToggleSign));
        assert_eq!("AC".parse::<Action>(), Ok(Action::ClearAll));
        assert_eq!("ce".parse::<Action>(), Ok(Action::ClearEntry));
        assert_eq!("×".parse::<Action>(), Ok(Action::Operation(BinaryOp::Multiply)));
        assert_eq!("SIN".parse::<Action>(), Ok(Action::Scientific(ScientificFn::Sin)));
        assert_eq!(
            "foo".parse::<Action>(),
            Err(CalcError::UnknownKey("foo".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for op in BinaryOp::ALL {
            assert_eq!(op.symbol().parse::<BinaryOp>(), Ok(op));
        }
        for func in ScientificFn::ALL {
            assert_eq!(func.name().parse::<ScientificFn>(), Ok(func));
        }
    }
}
