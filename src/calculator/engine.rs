//! Input state machine.
//!
//! [`CalculatorEngine`] turns keypad presses into display text. It holds at
//! most two operands and one pending operator; pressing an operator or `=`
//! while both operands are present folds the pending operation into the
//! first operand.

use serde::Serialize;
use tracing::{debug, warn};

use super::evaluation::calculate_result;
use super::key::{Key, Operator};

/// What the presentation layer needs to redraw after a key press.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// The engine's display text.
    pub display_text: String,
    /// Whether the calculator is switched off.
    pub powered_off: bool,
}

impl DisplayState {
    /// Text to draw on the screen. Blank while powered off.
    pub fn visible_text(&self) -> &str {
        if self.powered_off {
            ""
        } else {
            &self.display_text
        }
    }

    /// Label drawn on the power key.
    pub fn power_label(&self) -> &'static str {
        if self.powered_off { "On" } else { "Off" }
    }
}

/// The calculator's input state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorEngine {
    display_text: String,
    first_operand: String,
    second_operand: String,
    current_operator: Option<Operator>,
    should_reset: bool,
    is_powered_off: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine showing `"0"` with no pending operation.
    pub fn new() -> Self {
        Self {
            display_text: "0".to_string(),
            first_operand: String::new(),
            second_operand: String::new(),
            current_operator: None,
            should_reset: false,
            is_powered_off: false,
        }
    }

    /// Handle a keypad label.
    ///
    /// Labels outside the keypad alphabet are logged and ignored.
    pub fn handle_input(&mut self, label: &str) {
        match label.parse::<Key>() {
            Ok(key) => self.press(key),
            Err(err) => warn!("Ignoring input: {}", err),
        }
    }

    /// Handle a key press.
    pub fn press(&mut self, key: Key) {
        debug!(key = key.label(), "Key pressed");

        match key {
            Key::Power => self.toggle_power(),
            Key::Clear => {
                self.clear_operation();
                self.display_text = "0".to_string();
            }
            Key::Backspace => {
                if self.display_text.chars().count() > 1 {
                    self.display_text.pop();
                } else {
                    self.display_text = "0".to_string();
                }
            }
            Key::Operator(op) => {
                if self.has_both_operands() {
                    self.fold();
                }
                self.current_operator = Some(op);
                self.first_operand = self.display_text.clone();
                self.should_reset = true;
            }
            Key::Equals => {
                if self.has_both_operands() {
                    self.fold();
                    self.current_operator = None;
                    self.should_reset = true;
                }
            }
            Key::Digit(_) | Key::Point | Key::Memory => self.enter(key.label()),
        }
    }

    /// Current display text.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Left-hand operand, empty if none.
    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    /// Right-hand operand, empty if none.
    pub fn second_operand(&self) -> &str {
        &self.second_operand
    }

    /// Pending operator, if any.
    pub fn current_operator(&self) -> Option<Operator> {
        self.current_operator
    }

    /// Whether the next entry starts a fresh number.
    pub fn should_reset(&self) -> bool {
        self.should_reset
    }

    pub fn is_powered_off(&self) -> bool {
        self.is_powered_off
    }

    /// Snapshot of what the presentation layer draws.
    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            display_text: self.display_text.clone(),
            powered_off: self.is_powered_off,
        }
    }

    // `should_reset` survives a power cycle.
    fn toggle_power(&mut self) {
        self.is_powered_off = !self.is_powered_off;
        self.clear_operation();
        self.display_text = if self.is_powered_off {
            String::new()
        } else {
            "0".to_string()
        };
    }

    fn clear_operation(&mut self) {
        self.first_operand.clear();
        self.second_operand.clear();
        self.current_operator = None;
    }

    fn has_both_operands(&self) -> bool {
        !self.first_operand.is_empty() && !self.second_operand.is_empty()
    }

    /// Evaluate the pending operation into the display and first operand.
    fn fold(&mut self) {
        let operator = self.current_operator.map(Operator::symbol).unwrap_or("");
        let result = calculate_result(&self.first_operand, &self.second_operand, operator);
        debug!(
            first = %self.first_operand,
            second = %self.second_operand,
            operator,
            result = %result,
            "Folded pending operation"
        );
        self.display_text = result;
        self.first_operand = self.display_text.clone();
        self.second_operand.clear();
    }

    fn enter(&mut self, label: &str) {
        if self.should_reset {
            self.display_text = label.to_string();
            self.should_reset = false;
        } else if self.display_text == "0" {
            self.display_text = label.to_string();
        } else {
            self.display_text.push_str(label);
        }

        if self.current_operator.is_none() {
            self.first_operand = self.display_text.clone();
        } else {
            self.second_operand = self.display_text.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(engine: &mut CalculatorEngine, labels: &[&str]) {
        for label in labels {
            engine.handle_input(label);
        }
    }

    fn engine_after(labels: &[&str]) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, labels);
        engine
    }

    #[test]
    fn test_initial_state() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display_text(), "0");
        assert_eq!(engine.first_operand(), "");
        assert_eq!(engine.second_operand(), "");
        assert_eq!(engine.current_operator(), None);
        assert!(!engine.should_reset());
        assert!(!engine.is_powered_off());
    }

    #[test]
    fn test_digit_entry_replaces_leading_zero() {
        let engine = engine_after(&["0", "4", "2"]);
        assert_eq!(engine.display_text(), "42");
        assert_eq!(engine.first_operand(), "42");
    }

    #[test]
    fn test_decimal_entry() {
        let engine = engine_after(&["3", ".", "1", "4"]);
        assert_eq!(engine.display_text(), "3.14");

        // A point on the initial zero replaces it.
        let engine = engine_after(&[".", "5"]);
        assert_eq!(engine.display_text(), ".5");
    }

    #[test]
    fn test_multiple_points_accepted() {
        let engine = engine_after(&["1", ".", "2", ".", "3"]);
        assert_eq!(engine.display_text(), "1.2.3");
        assert_eq!(engine.first_operand(), "1.2.3");
    }

    #[test]
    fn test_simple_addition() {
        let engine = engine_after(&["7", "+", "3", "="]);
        assert_eq!(engine.display_text(), "10.0");
        assert_eq!(engine.first_operand(), "10.0");
        assert_eq!(engine.second_operand(), "");
        assert_eq!(engine.current_operator(), None);
        assert!(engine.should_reset());
    }

    #[test]
    fn test_operator_press_sets_pending_state() {
        let engine = engine_after(&["8", "×"]);
        assert_eq!(engine.display_text(), "8");
        assert_eq!(engine.first_operand(), "8");
        assert_eq!(engine.second_operand(), "");
        assert_eq!(engine.current_operator(), Some(Operator::Multiply));
        assert!(engine.should_reset());
    }

    #[test]
    fn test_second_operand_tracks_display() {
        let engine = engine_after(&["8", "×", "1", "2"]);
        assert_eq!(engine.display_text(), "12");
        assert_eq!(engine.first_operand(), "8");
        assert_eq!(engine.second_operand(), "12");
    }

    #[test]
    fn test_chained_operations_fold() {
        let mut engine = engine_after(&["4", "+", "6", "+"]);
        assert_eq!(engine.first_operand(), "10.0");
        assert_eq!(engine.display_text(), "10.0");
        assert_eq!(engine.second_operand(), "");

        press_all(&mut engine, &["2", "="]);
        assert_eq!(engine.display_text(), "12.0");
    }

    #[test]
    fn test_changing_operator_before_second_operand() {
        let engine = engine_after(&["9", "+", "−", "4", "="]);
        assert_eq!(engine.display_text(), "5.0");
    }

    #[test]
    fn test_chained_mixed_operators() {
        let engine = engine_after(&["9", "−", "4", "×", "3", "÷", "5", "="]);
        assert_eq!(engine.display_text(), "3.0");
    }

    #[test]
    fn test_equals_without_second_operand_is_noop() {
        let before = engine_after(&["5", "+"]);
        let mut after = before.clone();
        after.handle_input("=");
        assert_eq!(after, before);

        let before = engine_after(&["5"]);
        let mut after = before.clone();
        after.handle_input("=");
        assert_eq!(after, before);
    }

    #[test]
    fn test_repeated_equals_does_not_repeat_operation() {
        let engine = engine_after(&["2", "+", "3", "=", "="]);
        assert_eq!(engine.display_text(), "5.0");
    }

    #[test]
    fn test_digit_after_equals_starts_new_number() {
        let engine = engine_after(&["2", "+", "3", "=", "7"]);
        assert_eq!(engine.display_text(), "7");
        assert_eq!(engine.first_operand(), "7");
        assert!(!engine.should_reset());
    }

    #[test]
    fn test_result_feeds_next_operation() {
        let engine = engine_after(&["2", "+", "3", "=", "×", "4", "="]);
        assert_eq!(engine.display_text(), "20.0");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let engine = engine_after(&["5", "÷", "0", "="]);
        assert_eq!(engine.display_text(), "Error");
        assert_eq!(engine.first_operand(), "Error");
    }

    #[test]
    fn test_digits_after_error_replace_it() {
        let engine = engine_after(&["5", "÷", "0", "=", "3"]);
        assert_eq!(engine.display_text(), "3");
    }

    #[test]
    fn test_error_operand_propagates() {
        let engine = engine_after(&["5", "÷", "0", "=", "+", "2", "="]);
        assert_eq!(engine.display_text(), "Error");
    }

    #[test]
    fn test_malformed_operand_passes_through() {
        let engine = engine_after(&["1", ".", ".", "+", "2", "="]);
        assert_eq!(engine.display_text(), "1..");
    }

    #[test]
    fn test_truncated_infinity_passes_through() {
        let mut engine = CalculatorEngine::new();
        for _ in 0..310 {
            engine.handle_input("9");
        }
        engine.handle_input("×");
        for _ in 0..310 {
            engine.handle_input("9");
        }
        engine.handle_input("=");
        assert_eq!(engine.display_text(), "Infinity");

        for _ in 0..5 {
            engine.handle_input("←");
        }
        assert_eq!(engine.display_text(), "Inf");

        press_all(&mut engine, &["+", "2", "="]);
        assert_eq!(engine.display_text(), "Inf");
    }

    #[test]
    fn test_memory_key_is_entered_as_text() {
        let engine = engine_after(&["7", "M"]);
        assert_eq!(engine.display_text(), "7M");
        assert_eq!(engine.first_operand(), "7M");

        let engine = engine_after(&["M"]);
        assert_eq!(engine.display_text(), "M");
    }

    #[test]
    fn test_clear() {
        let mut engine = engine_after(&["4", "+", "6"]);
        engine.handle_input("C");
        assert_eq!(engine.display_text(), "0");
        assert_eq!(engine.first_operand(), "");
        assert_eq!(engine.second_operand(), "");
        assert_eq!(engine.current_operator(), None);
    }

    #[test]
    fn test_clear_keeps_reset_flag() {
        let mut engine = engine_after(&["4", "+"]);
        engine.handle_input("C");
        assert!(engine.should_reset());

        engine.handle_input("0");
        assert!(!engine.should_reset());
        assert_eq!(engine.display_text(), "0");
    }

    #[test]
    fn test_backspace() {
        let mut engine = engine_after(&["1", "2", "3"]);
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "12");
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "1");
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "0");
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "0");
    }

    #[test]
    fn test_backspace_does_not_touch_operands() {
        let mut engine = engine_after(&["1", "2", "3"]);
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "12");
        assert_eq!(engine.first_operand(), "123");
    }

    #[test]
    fn test_backspace_on_error() {
        let mut engine = engine_after(&["5", "÷", "0", "="]);
        engine.handle_input("←");
        assert_eq!(engine.display_text(), "Erro");
    }

    #[test]
    fn test_power_cycle() {
        let mut engine = engine_after(&["4", "+", "6"]);

        engine.handle_input("Off");
        assert!(engine.is_powered_off());
        assert_eq!(engine.display_text(), "");
        assert_eq!(engine.first_operand(), "");
        assert_eq!(engine.second_operand(), "");
        assert_eq!(engine.current_operator(), None);

        engine.handle_input("Off");
        assert!(!engine.is_powered_off());
        assert_eq!(engine.display_text(), "0");
        assert_eq!(engine.first_operand(), "");
    }

    #[test]
    fn test_power_keeps_reset_flag() {
        let mut engine = engine_after(&["4", "+"]);
        engine.handle_input("Off");
        engine.handle_input("Off");
        assert!(engine.should_reset());
    }

    #[test]
    fn test_entry_while_powered_off() {
        let mut engine = engine_after(&["Off"]);
        engine.handle_input("5");
        assert_eq!(engine.display_text(), "5");
        assert!(engine.is_powered_off());
        assert_eq!(engine.snapshot().visible_text(), "");
    }

    #[test]
    fn test_unknown_label_is_ignored() {
        let before = engine_after(&["4", "+", "6"]);
        let mut after = before.clone();
        after.handle_input("-");
        after.handle_input("sqrt");
        after.handle_input("");
        assert_eq!(after, before);
    }

    #[test]
    fn test_snapshot() {
        let engine = engine_after(&["1", "2"]);
        let state = engine.snapshot();
        assert_eq!(state.display_text, "12");
        assert_eq!(state.visible_text(), "12");
        assert_eq!(state.power_label(), "Off");

        let engine = engine_after(&["1", "2", "Off"]);
        let state = engine.snapshot();
        assert!(state.powered_off);
        assert_eq!(state.visible_text(), "");
        assert_eq!(state.power_label(), "On");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = engine_after(&["7"]).snapshot();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"display_text":"7","powered_off":false}"#);
    }
}
