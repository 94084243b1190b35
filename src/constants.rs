//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "AzTurk Keyboard";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "azturk-keyboard";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "AzTurkKeyboard";
