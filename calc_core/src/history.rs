//! # Calculation History
//!
//! Every completed computation is recorded as a [`HistoryEntry`]. The trail
//! only grows; it is cleared by [`Calculator::reset`](crate::calculator::Calculator::reset)
//! and nothing else.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::format_result;
use crate::operator::Operator;

/// One completed computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// First operand as captured when the operator was pressed
    pub first: f64,

    /// First operand as it was shown on the display
    pub first_text: String,

    /// Operator that was applied
    pub operator: Operator,

    /// Second operand parsed from the display
    pub second: f64,

    /// Second operand as it was typed
    pub second_text: String,

    /// Formatted result, exactly as it was shown
    pub result: String,

    /// When the computation ran
    pub computed_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Record a computation that just completed.
    ///
    /// Operand text defaults to the formatted values; use
    /// [`with_operand_text`](Self::with_operand_text) to keep what was typed.
    pub fn new(first: f64, operator: Operator, second: f64, result: impl Into<String>) -> Self {
        HistoryEntry {
            first,
            first_text: format_result(first),
            operator,
            second,
            second_text: format_result(second),
            result: result.into(),
            computed_at: Utc::now(),
        }
    }

    /// Replace the operand text with the display strings the user saw.
    pub fn with_operand_text(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_text = first.into();
        self.second_text = second.into();
        self
    }

    /// The left-hand side of the record, e.g. `"5 + 3"`
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.first_text, self.operator.symbol(), self.second_text)
    }
}

/// Operand text for a history record: the display minus a dangling `.`
pub fn operand_text(display: &str) -> String {
    let text = display.strip_suffix('.').unwrap_or(display);
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// Render a trail of entries, joined by `separator`.
pub fn render(entries: &[HistoryEntry], separator: &str) -> String {
    entries
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry::new(5.0, Operator::Add, 3.0, "8");
        assert_eq!(entry.to_string(), "5 + 3 = 8");
    }

    #[test]
    fn test_entry_formats_operands() {
        let entry = HistoryEntry::new(1.5, Operator::Multiply, 2.0, "3");
        assert_eq!(entry.expression(), "1.5 × 2");
    }

    #[test]
    fn test_entry_keeps_typed_operands() {
        let entry = HistoryEntry::new(1.23456789, Operator::Add, 1.0, "2.234568")
            .with_operand_text("1.23456789", "1");
        assert_eq!(entry.to_string(), "1.23456789 + 1 = 2.234568");
    }

    #[test]
    fn test_operand_text() {
        assert_eq!(operand_text("12"), "12");
        assert_eq!(operand_text("5."), "5");
        assert_eq!(operand_text("0."), "0");
        assert_eq!(operand_text("-2.5"), "-2.5");
    }

    #[test]
    fn test_render() {
        let entries = vec![
            HistoryEntry::new(5.0, Operator::Add, 3.0, "8"),
            HistoryEntry::new(8.0, Operator::Multiply, 2.0, "16"),
        ];
        assert_eq!(render(&entries, "\n"), "5 + 3 = 8\n8 × 2 = 16");
        assert_eq!(render(&entries, "; "), "5 + 3 = 8; 8 × 2 = 16");
        assert_eq!(render(&[], "\n"), "");
    }
}
