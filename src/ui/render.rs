//! Terminal rendering of the display and keypad.
//!
//! The renderer only reads a [`DisplayState`]; it never touches the engine.

use console::{Alignment, pad_str};

use super::theme::Skin;
use crate::calculator::{DisplayState, KEYPAD_ROWS, Key};

/// Width of a single key cell, in columns.
const KEY_WIDTH: usize = 5;
/// Columns between key cells.
const KEY_GAP: usize = 2;
/// Total width of the screen.
pub const SCREEN_WIDTH: usize = KEY_WIDTH * 4 + KEY_GAP * 5;

/// Options controlling what gets drawn.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub skin: Skin,
    pub show_keypad: bool,
}

/// Text drawn on a key given the current state.
///
/// The power key reads "On" while the calculator is off.
pub fn key_caption(label: &'static str, state: &DisplayState) -> &'static str {
    if label == Key::Power.label() {
        state.power_label()
    } else {
        label
    }
}

/// Draw the full screen as a block of lines.
pub fn render_screen(state: &DisplayState, options: RenderOptions) -> String {
    let palette = options.skin.palette();
    let background = palette.background_style();
    let mut lines = Vec::new();

    lines.push(background.apply(" ".repeat(SCREEN_WIDTH)).to_string());
    lines.push(render_display(state, options));
    lines.push(background.apply(" ".repeat(SCREEN_WIDTH)).to_string());

    if options.show_keypad {
        for row in KEYPAD_ROWS {
            lines.push(render_row(&row, state, options));
        }
        lines.push(background.apply(" ".repeat(SCREEN_WIDTH)).to_string());
    }

    lines.join("\n")
}

/// The display line, right-aligned and blank while powered off.
fn render_display(state: &DisplayState, options: RenderOptions) -> String {
    let inner = SCREEN_WIDTH - KEY_GAP * 2;
    let text = pad_str(state.visible_text(), inner, Alignment::Right, Some("…"));
    let gap = " ".repeat(KEY_GAP);
    let palette = options.skin.palette();
    format!(
        "{}{}{}",
        palette.background_style().apply(&gap),
        palette.display_style().apply(text),
        palette.background_style().apply(&gap)
    )
}

fn render_row(row: &[&'static str; 4], state: &DisplayState, options: RenderOptions) -> String {
    let palette = options.skin.palette();
    let gap = palette
        .background_style()
        .apply(" ".repeat(KEY_GAP))
        .to_string();

    let mut line = gap.clone();
    for &label in row {
        let accent = label.parse::<Key>().map(Key::is_accent).unwrap_or(false);
        let caption = pad_str(key_caption(label, state), KEY_WIDTH, Alignment::Center, None);
        line.push_str(&palette.key_style(accent).apply(caption).to_string());
        line.push_str(&gap);
    }
    line
}
