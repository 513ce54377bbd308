//! # Operators
//!
//! The fixed set of binary operators the keypad offers. Each operator knows
//! its display symbol, how to parse itself from host input, and how to apply
//! itself to two operands.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operator::Operator;
//!
//! let op: Operator = "×".parse().unwrap();
//! assert_eq!(op, Operator::Multiply);
//! assert_eq!(op.apply(6.0, 7.0), Some(42.0));
//! assert_eq!(Operator::Divide.apply(9.0, 0.0), None);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulus,
    ];

    /// Symbol shown in the display and history
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "/",
            Operator::Modulus => "%",
        }
    }

    /// Parse a host symbol.
    ///
    /// Accepts the display symbols plus the common keyboard aliases
    /// `*`, `x` (multiply) and `÷` (divide).
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol.trim() {
            "+" => Some(Operator::Add),
            "-" | "−" => Some(Operator::Subtract),
            "×" | "*" | "x" | "X" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            "%" => Some(Operator::Modulus),
            _ => None,
        }
    }

    /// True for operators whose second operand must not be zero
    pub fn rejects_zero_divisor(self) -> bool {
        matches!(self, Operator::Divide | Operator::Modulus)
    }

    /// Apply the operator.
    ///
    /// Returns `None` when a divide or modulus sees a second operand of
    /// exactly zero. Modulus follows the sign of the first operand.
    pub fn apply(self, first: f64, second: f64) -> Option<f64> {
        if self.rejects_zero_divisor() && second == 0.0 {
            return None;
        }
        Some(match self {
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Multiply => first * second,
            Operator::Divide => first / second,
            Operator::Modulus => first % second,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s)
            .ok_or_else(|| CalcError::invalid_input("operator", s, "Expected one of + - × / %"))
    }
}
