//! Engine state and its transitions
//!
//! `EngineState` is a plain value. Every command is a pure function from the
//! current state to the next one; commands that complete a calculation also
//! hand back the `Calculation` to record. The `Calculator` holder applies
//! these transitions in place and owns the history ledger.

use crate::numfmt::{format_number, parse_display};
use crate::operation::{calculate, Action, BinaryOp, Digit, ScientificFn};
use serde::Serialize;

/// A completed calculation waiting to be recorded in history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub expression: String,
    pub result: String,
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: EngineState,
    pub completed: Option<Calculation>,
}

impl From<EngineState> for Transition {
    fn from(state: EngineState) -> Self {
        Self {
            state,
            completed: None,
        }
    }
}

/// Calculator engine state
///
/// `display` is always a numeric literal (possibly mid-entry, such as `"5."`),
/// `"NaN"` or a signed `"Infinity"`. It is never empty and holds at most one
/// decimal point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    display: String,
    equation: String,
    pending_value: Option<f64>,
    pending_operator: Option<BinaryOp>,
    awaiting_new_operand: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
            pending_value: None,
            pending_operator: None,
            awaiting_new_operand: false,
        }
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn pending_value(&self) -> Option<f64> {
        self.pending_value
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    pub fn awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Numeric value of the display
    pub fn display_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// NaN and infinities cannot be extended by digit or dot entry
    /// Whether digit and dot entry may extend the current display
    ///
    /// Exponent forms like `1e-8` and non-finite results are replaced instead.
    fn display_is_editable(&self) -> bool {
        !self.display.contains('e') && self.display_value().is_finite()
    }

    /// Dispatch an action to its command
    pub fn apply(&self, action: Action) -> Transition {
        match action {
            Action::Digit(digit) => self.input_digit(digit).into(),
            Action::Dot => self.input_dot().into(),
            Action::ToggleSign => self.toggle_sign().into(),
            Action::Percent => self.input_percent().into(),
            Action::ClearAll => self.clear_all().into(),
            Action::ClearEntry => self.clear_entry().into(),
            Action::Operation(op) => self.handle_operation(op).into(),
            Action::Equals => self.perform_equals(),
            Action::Scientific(func) => self.perform_scientific(func),
        }
    }

    pub fn input_digit(&self, digit: Digit) -> Self {
        let mut next = self.clone();
        if self.awaiting_new_operand || self.display == "0" || !self.display_is_editable() {
            next.display = digit.to_string();
            next.awaiting_new_operand = false;
        } else {
            next.display.push(digit.as_char());
        }
        next
    }

    pub fn input_dot(&self) -> Self {
        let mut next = self.clone();
        if self.awaiting_new_operand || !self.display_is_editable() {
            next.display = "0.".to_string();
            next.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    /// Negate the display, keeping its text (`"0.50"` becomes `"-0.50"`)
    ///
    /// Zero and NaN have no sign to flip and are left alone.
    pub fn toggle_sign(&self) -> Self {
        let value = self.display_value();
        if value == 0.0 || value.is_nan() {
            return self.clone();
        }

        let mut next = self.clone();
        next.display = match self.display.strip_prefix('-') {
            Some(positive) => positive.to_string(),
            None => format!("-{}", self.display),
        };
        next
    }

    pub fn input_percent(&self) -> Self {
        let mut next = self.clone();
        next.display = format_number(self.display_value() / 100.0);
        next
    }

    pub fn clear_all(&self) -> Self {
        Self::default()
    }

    /// Reset the display only, keeping any pending operation
    pub fn clear_entry(&self) -> Self {
        let mut next = self.clone();
        next.display = "0".to_string();
        next
    }

    /// Select a binary operator, resolving any pending one first
    ///
    /// Chained operators evaluate left to right against the running total,
    /// with no precedence: `2 + 3 * 4` gives `20`.
    pub fn handle_operation(&self, next_op: BinaryOp) -> Self {
        let mut next = self.clone();
        let input = self.display_value();

        match (self.pending_value, self.pending_operator) {
            (None, _) => {
                next.pending_value = Some(input);
                next.equation = format!("{} {}", format_number(input), next_op);
            },
            (Some(pending), Some(op)) => {
                let result = calculate(pending, input, Some(op));
                let formatted = format_number(result);
                next.pending_value = Some(result);
                next.equation = format!("{} {}", formatted, next_op);
                next.display = formatted;
            },
            // A pending value always comes with its operator
            (Some(_), None) => {},
        }

        next.awaiting_new_operand = true;
        next.pending_operator = Some(next_op);
        next
    }

    /// Resolve the pending operation; no-op when nothing is pending
    pub fn perform_equals(&self) -> Transition {
        let (Some(pending), Some(op)) = (self.pending_value, self.pending_operator) else {
            return self.clone().into();
        };

        let input = self.display_value();
        let result = format_number(calculate(pending, input, Some(op)));
        let expression = format!(
            "{} {} {} =",
            format_number(pending),
            op,
            format_number(input)
        );

        let state = Self {
            display: result.clone(),
            equation: String::new(),
            pending_value: None,
            pending_operator: None,
            awaiting_new_operand: true,
        };
        Transition {
            state,
            completed: Some(Calculation { expression, result }),
        }
    }

    /// Apply a unary function to the display
    ///
    /// Any pending binary operation is kept, so `5 + 9 sqrt =` gives `8`.
    pub fn perform_scientific(&self, func: ScientificFn) -> Transition {
        let input = self.display_value();
        let result = format_number(func.apply(input));
        let expression = func.describe(&format_number(input));

        let mut state = self.clone();
        state.display = result.clone();
        state.awaiting_new_operand = true;
        Transition {
            state,
            completed: Some(Calculation { expression, result }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Action {
        Action::Digit(Digit::new(d).unwrap())
    }

    fn run(actions: &[Action]) -> (EngineState, Vec<Calculation>) {
        let mut state = EngineState::new();
        let mut completed = Vec::new();
        for action in actions {
            let transition = state.apply(*action);
            state = transition.state;
            completed.extend(transition.completed);
        }
        (state, completed)
    }

    #[test]
    fn test_default_state() {
        let state = EngineState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.equation(), "");
        assert_eq!(state.pending_value(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_new_operand());
    }

    #[test]
    fn test_transitions_do_not_mutate_input() {
        let state = EngineState::new();
        let next = state.input_digit(Digit::new(7).unwrap());
        assert_eq!(state.display(), "0");
        assert_eq!(next.display(), "7");
    }

    #[test]
    fn test_leading_zero_replaced() {
        let (state, _) = run(&[digit(0), digit(0), digit(4), digit(2)]);
        assert_eq!(state.display(), "42");
    }

    #[test]
    fn test_dot_after_zero_keeps_zero() {
        let (state, _) = run(&[Action::Dot, digit(5)]);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_dot_after_operator_starts_fresh() {
        let (state, _) = run(&[digit(7), Action::Operation(BinaryOp::Add), Action::Dot]);
        assert_eq!(state.display(), "0.");
        assert!(!state.awaiting_new_operand());
    }

    #[test]
    fn test_operation_sets_equation() {
        let (state, _) = run(&[digit(5), Action::Dot, Action::Operation(BinaryOp::Add)]);
        assert_eq!(state.equation(), "5 +");
        assert_eq!(state.pending_value(), Some(5.0));
        assert_eq!(state.pending_operator(), Some(BinaryOp::Add));
        assert!(state.awaiting_new_operand());
    }

    #[test]
    fn test_no_operator_precedence() {
        let (state, _) = run(&[
            digit(2),
            Action::Operation(BinaryOp::Add),
            digit(3),
            Action::Operation(BinaryOp::Multiply),
            digit(4),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "20");
    }

    #[test]
    fn test_repeated_operator_resolves_against_display() {
        // `5 + *` resolves 5 + 5 before switching operator
        let (state, _) = run(&[
            digit(5),
            Action::Operation(BinaryOp::Add),
            Action::Operation(BinaryOp::Multiply),
        ]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.equation(), "10 *");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let (state, completed) = run(&[digit(9), Action::Equals]);
        assert_eq!(state.display(), "9");
        assert!(!state.awaiting_new_operand());
        assert!(completed.is_empty());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let (state, _) = run(&[
            digit(2),
            Action::Operation(BinaryOp::Power),
            digit(3),
            Action::Equals,
            digit(1),
        ]);
        assert_eq!(state.display(), "1");
    }

    #[test]
    fn test_scientific_keeps_pending_operation() {
        let (state, completed) = run(&[
            digit(5),
            Action::Operation(BinaryOp::Add),
            digit(9),
            Action::Scientific(ScientificFn::Sqrt),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "8");
        assert_eq!(completed.len(), 2);
        assert_eq!(completed[0].expression, "sqrt(9)");
        assert_eq!(completed[1].expression, "5 + 3 =");
    }

    #[test]
    fn test_nan_display_is_replaced_by_entry() {
        let (state, _) = run(&[
            digit(1),
            Action::Operation(BinaryOp::Divide),
            digit(0),
            Action::Equals,
            Action::Percent,
        ]);
        assert_eq!(state.display(), "NaN");

        let state = state.input_dot();
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn test_toggle_sign_preserves_text() {
        let (state, _) = run(&[Action::Dot, digit(5), digit(0), Action::ToggleSign]);
        assert_eq!(state.display(), "-0.50");
        assert_eq!(state.toggle_sign().display(), "0.50");
    }

    #[test]
    fn test_toggle_sign_on_zero() {
        let state = EngineState::new().toggle_sign();
        assert_eq!(state.display(), "0");
        let state = state.input_dot().toggle_sign();
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn test_percent() {
        let (state, _) = run(&[digit(5), digit(0), Action::Percent]);
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_clear_entry_keeps_pending() {
        let (state, _) = run(&[
            digit(8),
            Action::Operation(BinaryOp::Subtract),
            digit(9),
            Action::ClearEntry,
            digit(3),
            Action::Equals,
        ]);
        assert_eq!(state.display(), "5");
    }
}
