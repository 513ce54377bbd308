//! # Keypad Keys
//!
//! Hosts receive raw key presses (characters, button labels, words typed at
//! a prompt). [`Key`] is the typed form of one press and
//! [`Calculator::press`] routes it to the matching operation.
//!
//! ## Accepted input
//!
//! | Input                          | Key                 |
//! |--------------------------------|---------------------|
//! | `0`-`9`                        | `Digit`             |
//! | `.`                            | `Dot`               |
//! | `+ - × * x / ÷ %`              | `Operator`          |
//! | `=`, `enter`                   | `Equals`            |
//! | `<`, `backspace`, `del`        | `Backspace`         |
//! | `c`, `C`, `clear`, `reset`     | `Clear`             |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::keys::parse_keys;
//!
//! let mut calc = Calculator::new();
//! for key in parse_keys("12 + 3 =").unwrap() {
//!     calc.press(key).unwrap();
//! }
//! assert_eq!(calc.current_value(), "15");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Digit(char),
    Dot,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl Key {
    /// Map a single character to a key.
    pub fn from_char(c: char) -> CalcResult<Key> {
        match c {
            '0'..='9' => Ok(Key::Digit(c)),
            '.' => Ok(Key::Dot),
            '=' => Ok(Key::Equals),
            '<' => Ok(Key::Backspace),
            'c' | 'C' => Ok(Key::Clear),
            _ => {
                let mut buf = [0u8; 4];
                Operator::from_symbol(c.encode_utf8(&mut buf))
                    .map(Key::Operator)
                    .ok_or_else(|| CalcError::invalid_input("key", c.to_string(), "Unrecognised key"))
            }
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "enter" => return Ok(Key::Equals),
            "backspace" | "del" => return Ok(Key::Backspace),
            "clear" | "reset" => return Ok(Key::Clear),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::from_char(c),
            _ => Err(CalcError::invalid_input("key", s, "Unrecognised key")),
        }
    }
}

/// Split a line of typed input into keys.
///
/// Whitespace is skipped. Alphabetic words (`clear`, `backspace`, `enter`...)
/// are matched whole; everything else is read one character at a time, so
/// `"12+3="` and `"12 + 3 ="` give the same keys. The whole line is rejected
/// if any part of it is not a key.
pub fn parse_keys(line: &str) -> CalcResult<Vec<Key>> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_alphabetic()) {
            keys.push(token.parse()?);
        } else {
            for c in token.chars() {
                keys.push(Key::from_char(c)?);
            }
        }
    }
    Ok(keys)
}

impl Calculator {
    /// Route a key press to the matching operation.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => self.input_digit(d)?,
            Key::Dot => self.input_dot(),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.calculate(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.reset(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('7').unwrap(), Key::Digit('7'));
        assert_eq!(Key::from_char('.').unwrap(), Key::Dot);
        assert_eq!(Key::from_char('×').unwrap(), Key::Operator(Operator::Multiply));
        assert_eq!(Key::from_char('*').unwrap(), Key::Operator(Operator::Multiply));
        assert_eq!(Key::from_char('%').unwrap(), Key::Operator(Operator::Modulus));
        assert_eq!(Key::from_char('=').unwrap(), Key::Equals);
        assert_eq!(Key::from_char('<').unwrap(), Key::Backspace);
        assert_eq!(Key::from_char('C').unwrap(), Key::Clear);
        assert!(Key::from_char('?').is_err());
    }

    #[test]
    fn test_from_str_words() {
        assert_eq!("clear".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("Backspace".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("enter".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
        assert!("12".parse::<Key>().is_err());
        assert!("sqrt".parse::<Key>().is_err());
    }

    #[test]
    fn test_parse_keys_compact() {
        let keys = parse_keys("12+3=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Operator(Operator::Add),
                Key::Digit('3'),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_words() {
        let keys = parse_keys("5 backspace 4 x 2 = clear").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('5'),
                Key::Backspace,
                Key::Digit('4'),
                Key::Operator(Operator::Multiply),
                Key::Digit('2'),
                Key::Equals,
                Key::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_keys_rejects_whole_line() {
        let err = parse_keys("1 + foo").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_press_drives_calculator() {
        let mut calc = Calculator::new();
        for key in parse_keys("9 / 0 =").unwrap() {
            calc.press(key).unwrap();
        }
        assert_eq!(calc.current_value(), "Error");

        calc.press(Key::Backspace).unwrap();
        assert_eq!(calc.current_value(), "0");
    }

    #[test]
    fn test_press_rejects_bad_digit() {
        let mut calc = Calculator::new();
        assert!(calc.press(Key::Digit('z')).is_err());
        assert_eq!(calc.current_value(), "0");
    }
}
