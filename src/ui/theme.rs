//! Skins and their colors.

use clap::ValueEnum;
use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which skin the calculator is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Light,
    Dark,
}

impl Skin {
    /// The other skin.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// A 24-bit color from `0xRRGGBB`.
pub const fn hex(value: u32) -> Color {
    Color::Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    }
}

/// Splash screen colors.
pub const SPLASH_BACKGROUND: Color = hex(0xDDE9FF);
pub const SPLASH_TEXT: Color = hex(0x0000FF);

/// Colors for one skin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub display_text: Color,
    pub key_face: Color,
    pub key_text: Color,
    pub accent: Color,
}

impl Palette {
    pub const LIGHT: Self = Self {
        background: hex(0xFFFFFF),
        display_text: hex(0x0000FF),
        key_face: hex(0xFFFFFF),
        key_text: hex(0x000000),
        accent: hex(0x0000FF),
    };

    pub const DARK: Self = Self {
        background: hex(0x092C50),
        display_text: hex(0xC5DFFA),
        key_face: hex(0x165493),
        key_text: hex(0x001556),
        accent: hex(0xC5DFFA),
    };

    pub fn display_style(&self) -> ContentStyle {
        bold_style(self.display_text, self.background)
    }

    pub fn key_style(&self, accent: bool) -> ContentStyle {
        let fg = if accent { self.accent } else { self.key_text };
        bold_style(fg, self.key_face)
    }

    pub fn background_style(&self) -> ContentStyle {
        ContentStyle {
            background_color: Some(self.background),
            ..ContentStyle::new()
        }
    }
}

/// Bold text in `fg` on `bg`.
pub fn bold_style(fg: Color, bg: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(fg),
        background_color: Some(bg),
        attributes: Attribute::Bold.into(),
        ..ContentStyle::new()
    }
}
