pub mod render;
pub mod shell;
pub mod splash;
pub mod theme;

pub use render::{RenderOptions, render_screen};
pub use shell::{Command, Outcome, Shell};
pub use splash::{render_splash, splash_duration};
pub use theme::{Palette, Skin};
