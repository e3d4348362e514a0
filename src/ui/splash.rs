//! Splash screen shown before the calculator.

use std::time::Duration;

use console::{Alignment, pad_str};

use super::render::SCREEN_WIDTH;
use super::theme::{SPLASH_BACKGROUND, SPLASH_TEXT, bold_style};

const BANNER: [&str; 3] = ["┌───┬───┐", "│ + │ − │", "└───┴───┘"];

/// Draw the splash banner as a block of lines.
pub fn render_splash() -> String {
    let style = bold_style(SPLASH_TEXT, SPLASH_BACKGROUND);
    let title = concat!("pocketcalc ", env!("CARGO_PKG_VERSION"));

    let mut lines = vec![String::new()];
    lines.extend(BANNER.iter().copied().map(String::from));
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push(String::new());

    lines
        .iter()
        .map(|line| {
            let padded = pad_str(line, SCREEN_WIDTH, Alignment::Center, None);
            style.apply(padded).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// How long the splash stays up. `None` skips it.
pub fn splash_duration(splash_ms: u64) -> Option<Duration> {
    (splash_ms > 0).then(|| Duration::from_millis(splash_ms))
}
