//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and placeholders
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Keyboard tray behind the keys
    pub keyboard_bg: Color,

    // Keys
    /// Face of a regular letter key
    pub key_face: Color,
    /// Face of a special key (control row, delete)
    pub special_key_face: Color,
    /// Label on any key
    pub key_label: Color,
    /// Face of the key currently held down
    pub pressed_key_face: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the user's theme preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            keyboard_bg: Color::Rgb(43, 43, 43),

            key_face: Color::Rgb(107, 107, 107),
            special_key_face: Color::Rgb(70, 70, 70),
            key_label: Color::White,
            pressed_key_face: Color::Rgb(150, 150, 150),
        }
    }

    /// Creates a light theme matching the stock light keyboard.
    ///
    /// Tray (209, 212, 217), white letter keys, (172, 179, 188) special keys.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(0, 122, 255),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            keyboard_bg: Color::Rgb(209, 212, 217),

            key_face: Color::White,
            special_key_face: Color::Rgb(172, 179, 188),
            key_label: Color::Black,
            pressed_key_face: Color::Rgb(230, 230, 230),
        }
    }

    /// Face color for a key.
    #[must_use]
    pub const fn key_face_for(&self, special: bool, pressed: bool) -> Color {
        if pressed {
            self.pressed_key_face
        } else if special {
            self.special_key_face
        } else {
            self.key_face
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
