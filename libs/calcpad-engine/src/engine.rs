//! Calculator - engine state holder
//!
//! Owns the current `EngineState` and the history ledger. Each command runs
//! a pure state transition, swaps the result in, and records any completed
//! calculation.

use crate::ledger::{HistoryEntry, HistoryLedger};
use crate::operation::{Action, BinaryOp, Digit, ScientificFn};
use crate::state::{EngineState, Transition};
use crate::time::{SystemTimeProvider, TimeProvider};
use tracing::{debug, warn};

/// Calculator - display state plus bounded history
///
/// # Example
/// ```rust
/// use calcpad_engine::{BinaryOp, Calculator, Digit};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(Digit::new(5).unwrap());
/// calc.handle_operation(BinaryOp::Add);
/// calc.input_digit(Digit::new(3).unwrap());
/// calc.perform_equals();
///
/// assert_eq!(calc.display(), "8");
/// assert_eq!(calc.history()[0].expression, "5 + 3 =");
/// ```
#[derive(Debug)]
pub struct Calculator<T: TimeProvider = SystemTimeProvider> {
    state: EngineState,
    ledger: HistoryLedger<T>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_ledger(HistoryLedger::new())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeProvider> Calculator<T> {
    /// Create a calculator recording into the given ledger
    pub fn with_ledger(ledger: HistoryLedger<T>) -> Self {
        Self {
            state: EngineState::default(),
            ledger,
        }
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn equation(&self) -> &str {
        self.state.equation()
    }

    /// History entries, most recent first
    pub fn history(&self) -> &[HistoryEntry] {
        self.ledger.entries()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn ledger(&self) -> &HistoryLedger<T> {
        &self.ledger
    }

    /// Apply one input event
    ///
    /// Returns the history entry when the action completed a calculation.
    pub fn apply(&mut self, action: Action) -> Option<&HistoryEntry> {
        let transition = self.state.apply(action);
        self.commit(action, transition)
    }

    /// Apply a sequence of input events in order
    pub fn apply_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.apply(action);
        }
    }

    fn commit(&mut self, action: Action, transition: Transition) -> Option<&HistoryEntry> {
        let Transition { state, completed } = transition;
        self.state = state;

        debug!(
            %action,
            display = %self.state.display(),
            equation = %self.state.equation(),
            "transition"
        );

        let calculation = completed?;
        if calculation.result == "NaN" {
            warn!(expression = %calculation.expression, "calculation produced NaN");
        }
        Some(self.ledger.record(calculation.expression, calculation.result))
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.apply(Action::Digit(digit));
    }

    pub fn input_dot(&mut self) {
        self.apply(Action::Dot);
    }

    pub fn toggle_sign(&mut self) {
        self.apply(Action::ToggleSign);
    }

    pub fn input_percent(&mut self) {
        self.apply(Action::Percent);
    }

    pub fn clear_all(&mut self) {
        self.apply(Action::ClearAll);
    }

    pub fn clear_entry(&mut self) {
        self.apply(Action::ClearEntry);
    }

    pub fn handle_operation(&mut self, op: BinaryOp) {
        self.apply(Action::Operation(op));
    }

    pub fn perform_equals(&mut self) -> Option<&HistoryEntry> {
        self.apply(Action::Equals)
    }

    pub fn perform_scientific(&mut self, func: ScientificFn) -> Option<&HistoryEntry> {
        self.apply(Action::Scientific(func))
    }
}
