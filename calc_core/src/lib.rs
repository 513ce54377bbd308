//! # calc_core - Keypad Calculator Engine
//!
//! `calc_core` is the logic behind a four-function (plus modulus) keypad
//! calculator: the input state machine that turns key presses into a display
//! value, and the formatter that turns results into display strings. It has
//! no UI of its own; hosts call the operations and render the state.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: one [`Calculator`] per session, no globals
//! - **Never panics on input**: bad keys come back as [`CalcError`], arithmetic
//!   errors show up as the `"Error"` display
//! - **JSON-First**: state, history and errors serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.input_digits("9").unwrap();
//! calc.input_operator_symbol("/").unwrap();
//! calc.input_digit('0').unwrap();
//! calc.calculate();
//! assert_eq!(calc.current_value(), "Error");
//!
//! calc.backspace();
//! assert_eq!(calc.current_value(), "0");
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The state machine and its six operations
//! - [`operator`] - Operator set, symbols and arithmetic
//! - [`format`] - Result formatting
//! - [`history`] - Completed computation records
//! - [`keys`] - Host key translation and dispatch
//! - [`settings`] - Display configuration
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod format;
pub mod history;
pub mod keys;
pub mod operator;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculator::{Calculator, Phase};
pub use errors::{CalcError, CalcResult};
pub use format::{format_result, format_result_with_precision};
pub use history::HistoryEntry;
pub use keys::{parse_keys, Key};
pub use operator::Operator;
pub use settings::Settings;
