//! calcpad-engine - Calculator state machine and calculation history
//!
//! Turns a stream of discrete key presses into a display value and an
//! equation trace, and keeps a bounded, most-recent-first log of completed
//! calculations.
//!
//! # Features
//!
//! - **Keypad entry**: digits, decimal point, sign toggle, percent, clear
//! - **Chained operators**: `+ - * / ^` evaluated left to right, no precedence
//! - **Scientific functions**: `sqrt`, `sin`, `cos`, `tan` (degrees), `log`, `ln`
//! - **History**: 50 most recent calculations with id and timestamp
//!
//! # Example
//!
//! ```rust
//! use calcpad_engine::{Action, Calculator};
//!
//! let mut calc = Calculator::new();
//! for key in ["5", "+", "3", "+", "2", "="] {
//!     calc.apply(key.parse::<Action>().unwrap());
//! }
//!
//! assert_eq!(calc.display(), "10");
//! assert_eq!(calc.history().len(), 1);
//! assert_eq!(calc.history()[0].expression, "8 + 2 =");
//! ```
//!
//! # Arithmetic
//!
//! | Operator | Result |
//! |----------|--------|
//! | `+` | a + b |
//! | `-` | a - b |
//! | `*` | a * b |
//! | `/` | `NaN` when b is zero, else a / b |
//! | `^` | a raised to b |
//!
//! Values are `f64`. Errors such as division by zero or `sqrt(-1)` show up as
//! `NaN` on the display and in history; they never abort a calculation.

pub mod engine;
pub mod error;
pub mod ledger;
pub mod numfmt;
pub mod operation;
pub mod state;
pub mod time;

// Re-exports for convenience
pub use engine::Calculator;
pub use error::{CalcError, Result};
pub use ledger::{HistoryEntry, HistoryLedger, HISTORY_CAPACITY};
pub use numfmt::{format_number, parse_display};
pub use operation::{calculate, Action, BinaryOp, Digit, ScientificFn};
pub use state::{Calculation, EngineState, Transition};
pub use time::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
