//! A pocket calculator with light and dark skins.
//!
//! [`calculator::CalculatorEngine`] is the input state machine; everything
//! under [`ui`] only reads its [`calculator::DisplayState`] snapshots.

pub mod calculator;
pub mod config;
pub mod ui;
