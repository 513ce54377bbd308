//! # Calculator State Machine
//!
//! [`Calculator`] owns one session's state and is mutated only through its
//! operations:
//!
//! | Operation            | Effect                                                |
//! |----------------------|-------------------------------------------------------|
//! | [`input_digit`]      | start a new number or append to the current one       |
//! | [`input_dot`]        | add the decimal point (at most once)                  |
//! | [`input_operator`]   | capture the first operand, chain, or swap operator    |
//! | [`calculate`]        | apply the pending operator                            |
//! | [`backspace`]        | delete the last character, recover from error         |
//! | [`reset`]            | back to `"0"` with empty history                      |
//!
//! The display value is kept as a string buffer so partially typed input
//! such as `"0."` survives exactly as entered.
//!
//! ## Error state
//!
//! Dividing (or taking the modulus) by zero shows `"Error"` and clears the
//! pending operation. From there:
//!
//! - a digit or decimal point starts a fresh number
//! - an operator is ignored
//! - backspace restores `"0"`
//! - reset clears everything
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::operator::Operator;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('5').unwrap();
//! calc.input_operator(Operator::Add);
//! calc.input_digit('3').unwrap();
//! calc.calculate();
//! assert_eq!(calc.current_value(), "8");
//!
//! calc.input_operator(Operator::Multiply);
//! calc.input_digit('2').unwrap();
//! calc.calculate();
//! assert_eq!(calc.current_value(), "16");
//! assert_eq!(calc.history(), "5 + 3 = 8\n8 × 2 = 16");
//! ```
//!
//! [`input_digit`]: Calculator::input_digit
//! [`input_dot`]: Calculator::input_dot
//! [`input_operator`]: Calculator::input_operator
//! [`calculate`]: Calculator::calculate
//! [`backspace`]: Calculator::backspace
//! [`reset`]: Calculator::reset

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_result_with_precision, ERROR_DISPLAY};
use crate::history::{self, operand_text, HistoryEntry};
use crate::operator::Operator;
use crate::settings::Settings;

/// Display value after reset
pub const INITIAL_DISPLAY: &str = "0";

/// Conceptual state of the calculator, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first number (initial state)
    EnteringFirstOperand,
    /// Operator chosen, second number not started
    OperatorSelected,
    /// Typing the second number
    EnteringSecondOperand,
    /// A result is shown; the next digit starts over
    ResultDisplayed,
    /// Showing `"Error"`
    Error,
}

/// One calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    current_value: String,
    first_operand: Option<f64>,
    #[serde(default)]
    first_operand_text: Option<String>,
    operator: Option<Operator>,
    history: Vec<HistoryEntry>,
    awaiting_new_operand: bool,
    error: Option<CalcError>,
    settings: Settings,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::with_settings(Settings::default())
    }
}

impl Calculator {
    /// Create a calculator showing `"0"` with default settings.
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Create a calculator with custom display settings.
    pub fn with_settings(settings: Settings) -> Self {
        Calculator {
            current_value: INITIAL_DISPLAY.to_string(),
            first_operand: None,
            first_operand_text: None,
            operator: None,
            history: Vec::new(),
            awaiting_new_operand: false,
            error: None,
            settings,
        }
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    /// The value being typed, the last result, or `"Error"`
    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// Operand captured when the pending operator was pressed
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Pending operator, if any
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Completed computations rendered as text, `""` when there are none
    pub fn history(&self) -> String {
        history::render(&self.history, &self.settings.history_separator)
    }

    /// Completed computations as structured records
    pub fn history_entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether the next digit or decimal point starts a new number
    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Whether the display shows `"Error"`
    pub fn is_error(&self) -> bool {
        self.current_value == ERROR_DISPLAY
    }

    /// Why the calculator is in the error state
    pub fn last_error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// Display settings this session was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Derive the conceptual state from the fields.
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if self.operator.is_some() {
            if self.awaiting_new_operand {
                Phase::OperatorSelected
            } else {
                Phase::EnteringSecondOperand
            }
        } else if self.awaiting_new_operand {
            Phase::ResultDisplayed
        } else {
            Phase::EnteringFirstOperand
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Enter one digit.
    ///
    /// Returns `InvalidInput` for anything outside `'0'..='9'`, leaving the
    /// state untouched.
    pub fn input_digit(&mut self, digit: char) -> CalcResult<()> {
        if !digit.is_ascii_digit() {
            return Err(CalcError::invalid_input(
                "digit",
                digit.to_string(),
                "Expected a digit 0-9",
            ));
        }

        if self.starts_new_operand() {
            self.begin_operand(digit.to_string());
        } else if self.current_value == INITIAL_DISPLAY {
            self.current_value = digit.to_string();
        } else {
            self.current_value.push(digit);
        }

        debug!(digit = %digit, display = %self.current_value, "digit input");
        Ok(())
    }

    /// Enter several digits in order, e.g. `"10"`.
    ///
    /// Stops at the first non-digit; digits before it are kept.
    pub fn input_digits(&mut self, digits: &str) -> CalcResult<()> {
        for digit in digits.chars() {
            self.input_digit(digit)?;
        }
        Ok(())
    }

    /// Enter the decimal point. Repeated presses are absorbed.
    pub fn input_dot(&mut self) {
        if self.starts_new_operand() {
            self.begin_operand("0.".to_string());
        } else if !self.current_value.contains('.') {
            self.current_value.push('.');
        }

        debug!(display = %self.current_value, "decimal input");
    }

    /// Select an operator.
    ///
    /// - With nothing pending, the display becomes the first operand.
    /// - With an operator pending and a second operand typed, the pending
    ///   operation is computed first and its result becomes the first operand.
    /// - With an operator pending and no second operand yet, the pending
    ///   operator is replaced.
    ///
    /// Ignored while the display shows `"Error"`.
    pub fn input_operator(&mut self, op: Operator) {
        if self.is_error() {
            warn!(operator = %op, "operator ignored in error state");
            return;
        }

        match (self.operator, self.first_operand) {
            (Some(pending), Some(first)) if !self.awaiting_new_operand => {
                if !self.complete(first, pending) {
                    return;
                }
                self.capture_first_operand();
                debug!(result = %self.current_value, operator = %op, "chained operation");
            }
            (Some(pending), Some(_)) => {
                debug!(from = %pending, to = %op, "operator replaced");
            }
            _ => {
                self.capture_first_operand();
                debug!(first = %self.current_value, operator = %op, "operator selected");
            }
        }

        self.operator = Some(op);
        self.awaiting_new_operand = true;
    }

    /// Select an operator from its host symbol (`+ - × / %` and aliases).
    pub fn input_operator_symbol(&mut self, symbol: &str) -> CalcResult<()> {
        let op: Operator = symbol.parse()?;
        self.input_operator(op);
        Ok(())
    }

    /// Apply the pending operator to the first operand and the display.
    ///
    /// Does nothing unless an operator is pending.
    pub fn calculate(&mut self) {
        let (Some(op), Some(first)) = (self.operator, self.first_operand) else {
            debug!("calculate with nothing pending");
            return;
        };
        self.complete(first, op);
    }

    /// Delete the last character of the display.
    ///
    /// A single character, a lone minus sign, `"-0"`, or `"Error"` all
    /// become `"0"`. Right after an operator the display still shows the
    /// captured first operand, so there is nothing to delete.
    pub fn backspace(&mut self) {
        if self.phase() == Phase::OperatorSelected {
            debug!("backspace ignored before second operand");
            return;
        }

        if self.is_error() {
            self.current_value = INITIAL_DISPLAY.to_string();
            self.error = None;
        } else if self.current_value.chars().count() <= 1 {
            self.current_value = INITIAL_DISPLAY.to_string();
        } else {
            self.current_value.pop();
            if self.current_value == "-" || self.current_value == "-0" {
                self.current_value = INITIAL_DISPLAY.to_string();
            }
        }

        // Whatever is left is now being edited
        self.awaiting_new_operand = false;
        debug!(display = %self.current_value, "backspace");
    }

    /// Clear everything except settings.
    pub fn reset(&mut self) {
        self.current_value = INITIAL_DISPLAY.to_string();
        self.first_operand = None;
        self.first_operand_text = None;
        self.operator = None;
        self.history.clear();
        self.awaiting_new_operand = false;
        self.error = None;
        debug!("reset");
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn starts_new_operand(&self) -> bool {
        self.awaiting_new_operand || self.is_error()
    }

    fn begin_operand(&mut self, value: String) {
        self.current_value = value;
        self.awaiting_new_operand = false;
        self.error = None;
    }

    /// Numeric value of the display.
    ///
    /// Every reachable display other than `"Error"` parses; `"Error"` is never
    /// read as an operand.
    fn operand(&self) -> f64 {
        self.current_value.parse().unwrap_or(0.0)
    }

    fn capture_first_operand(&mut self) {
        self.first_operand = Some(self.operand());
        self.first_operand_text = Some(operand_text(&self.current_value));
    }

    /// Run `first op display` and show the result.
    ///
    /// Returns false if the calculator entered the error state instead.
    fn complete(&mut self, first: f64, op: Operator) -> bool {
        let second = self.operand();
        let precision = self.settings.precision;

        let result = match op.apply(first, second) {
            Some(value) if value.is_finite() => value,
            Some(_) => {
                let expression = format!(
                    "{} {} {}",
                    format_result_with_precision(first, precision),
                    op.symbol(),
                    format_result_with_precision(second, precision),
                );
                self.enter_error(CalcError::non_finite(expression));
                return false;
            }
            None => {
                self.enter_error(CalcError::division_undefined(op, first));
                return false;
            }
        };

        let display = format_result_with_precision(result, precision);
        let first_text = self
            .first_operand_text
            .take()
            .unwrap_or_else(|| format_result_with_precision(first, precision));
        let entry = HistoryEntry::new(first, op, second, display.clone())
            .with_operand_text(first_text, operand_text(&self.current_value));
        debug!(record = %entry, "calculated");

        self.history.push(entry);
        self.current_value = display;
        self.first_operand = None;
        self.first_operand_text = None;
        self.operator = None;
        self.awaiting_new_operand = true;
        true
    }

    fn enter_error(&mut self, error: CalcError) {
        warn!(error = %error, "calculation failed");
        self.current_value = ERROR_DISPLAY.to_string();
        self.first_operand = None;
        self.first_operand_text = None;
        self.operator = None;
        self.awaiting_new_operand = true;
        self.error = Some(error);
    }
}
