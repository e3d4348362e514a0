//! Interactive shell around the calculator engine.
//!
//! Each input line is split into tokens. A token is either a keypad label
//! (or a keyboard alias for one) that goes to the engine, or a `:command`
//! that only affects presentation.

use tracing::{debug, info};

use super::render::{RenderOptions, render_screen};
use super::theme::Skin;
use crate::calculator::{CalculatorEngine, DisplayState, Key};

/// A parsed shell token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward a key press to the engine.
    Press(Key),
    /// Switch to the given skin, or toggle when `None`.
    Theme(Option<Skin>),
    /// Redraw the keypad legend.
    Keys,
    /// Leave the shell.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        match token {
            ":dark" => return Self::Theme(Some(Skin::Dark)),
            ":light" => return Self::Theme(Some(Skin::Light)),
            ":theme" => return Self::Theme(None),
            ":keys" => return Self::Keys,
            ":quit" | ":q" => return Self::Quit,
            _ => {}
        }

        let label = resolve_alias(token);
        match label.parse::<Key>() {
            Ok(key) => Self::Press(key),
            Err(_) => Self::Unknown(token.to_string()),
        }
    }
}

/// Map keyboard-friendly spellings onto keypad labels.
fn resolve_alias(token: &str) -> &str {
    match token {
        "-" => "−",
        "*" | "x" => "×",
        "/" => "÷",
        "<" | "bs" => "←",
        "off" | "on" | "On" => "Off",
        "c" => "C",
        "m" => "M",
        other => other,
    }
}

/// What the caller should do after a line has been handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw and keep reading. Carries notices for unknown tokens.
    Continue { notices: Vec<String> },
    Quit,
}

/// The calculator session: one engine plus presentation state.
#[derive(Debug)]
pub struct Shell {
    engine: CalculatorEngine,
    skin: Skin,
    show_keypad: bool,
}

impl Shell {
    pub fn new(skin: Skin, show_keypad: bool) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            skin,
            show_keypad,
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn state(&self) -> DisplayState {
        self.engine.snapshot()
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let mut notices = Vec::new();

        for token in line.split_whitespace() {
            match Command::parse(token) {
                Command::Press(key) => self.engine.press(key),
                Command::Theme(skin) => {
                    self.skin = skin.unwrap_or_else(|| self.skin.toggled());
                    info!(skin = %self.skin, "Switched skin");
                }
                Command::Keys => self.show_keypad = true,
                Command::Quit => return Outcome::Quit,
                Command::Unknown(token) => {
                    debug!(token = %token, "Unknown token");
                    notices.push(format!("unknown key: {}", token));
                }
            }
        }

        Outcome::Continue { notices }
    }

    /// Draw the current screen.
    pub fn screen(&self) -> String {
        render_screen(
            &self.engine.snapshot(),
            RenderOptions {
                skin: self.skin,
                show_keypad: self.show_keypad,
            },
        )
    }
}
