//! Calculator core.
//!
//! This module provides:
//! - The typed key model for the keypad alphabet
//! - Two-operand arithmetic with a textual result
//! - The input state machine that drives the display

mod engine;
mod evaluation;
mod format;
mod key;

pub use engine::{CalculatorEngine, DisplayState};
pub use evaluation::calculate_result;
pub use format::format_double;
pub use key::{KEYPAD_ROWS, Key, KeyError, Operator};
