//! AzTurk Keyboard Library
//!
//! Key-input handling for an Azerbaijani Turkish keyboard in Arabic script:
//! the static key layout, the long-press alternatives table, the input
//! controller that turns gestures into text edits, and a terminal host that
//! draws the keyboard and feeds it mouse gestures.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod input;
pub mod models;
pub mod tui;
