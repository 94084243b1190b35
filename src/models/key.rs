//! Key identifiers and the text-edit action each key resolves to.

use std::fmt;

/// Label shown on the space bar ("space" in Azerbaijani Turkish).
pub const SPACE_LABEL: &str = "بوشلوق";
/// Label shown on the delete key.
pub const DELETE_LABEL: &str = "⌫";
/// Label shown on the newline key.
pub const NEWLINE_LABEL: &str = "↲";
/// Label shown on the numeric keyboard switch.
pub const NUMERIC_SHIFT_LABEL: &str = "123";
/// Label shown on the emoji keyboard switch.
pub const EMOJI_SHIFT_LABEL: &str = "😀";
/// Label shown on the keyboard options key.
pub const KEYBOARD_OPTIONS_LABEL: &str = "⌄";

/// Stable identifier for a key, independent of the glyph drawn on it.
///
/// Dispatch always goes through this tag, so changing a label (or drawing an
/// icon instead of text) never changes what the key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    /// Inserts its own character
    Literal(char),
    /// Removes one grapheme before the cursor
    Delete,
    /// Inserts a single space
    Space,
    /// Inserts a line feed
    Newline,
    /// Reserved for the number pad
    NumericShift,
    /// Reserved for the emoji keyboard
    EmojiShift,
    /// Reserved for keyboard options
    KeyboardOptions,
}

/// What a tap on a key does to the text sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert the given text at the cursor
    Insert(String),
    /// Delete one grapheme before the cursor
    DeleteBackward,
    /// Reserved key: no text edit
    Reserved,
}

impl KeyId {
    /// Resolves the key to its text-edit action.
    #[must_use]
    pub fn action(self) -> KeyAction {
        match self {
            Self::Literal(c) => KeyAction::Insert(c.to_string()),
            Self::Space => KeyAction::Insert(" ".to_string()),
            Self::Newline => KeyAction::Insert("\n".to_string()),
            Self::Delete => KeyAction::DeleteBackward,
            Self::NumericShift | Self::EmojiShift | Self::KeyboardOptions => KeyAction::Reserved,
        }
    }

    /// The glyph drawn on the key.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Literal(c) => c.to_string(),
            Self::Delete => DELETE_LABEL.to_string(),
            Self::Space => SPACE_LABEL.to_string(),
            Self::Newline => NEWLINE_LABEL.to_string(),
            Self::NumericShift => NUMERIC_SHIFT_LABEL.to_string(),
            Self::EmojiShift => EMOJI_SHIFT_LABEL.to_string(),
            Self::KeyboardOptions => KEYBOARD_OPTIONS_LABEL.to_string(),
        }
    }

    /// Parses a key label (or a control key name) into a key id.
    ///
    /// Accepts the drawn glyphs (`⌫`, `بوشلوق`, `↲`, ...), the control key
    /// names used in scripts (`delete`, `space`, `newline`, `numericShift`,
    /// `emojiShift`, `keyboardOptions`) and any single character as a literal.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            DELETE_LABEL | "delete" => return Some(Self::Delete),
            SPACE_LABEL | "space" => return Some(Self::Space),
            NEWLINE_LABEL | "newline" => return Some(Self::Newline),
            NUMERIC_SHIFT_LABEL | "numericShift" => return Some(Self::NumericShift),
            EMOJI_SHIFT_LABEL | "emojiShift" => return Some(Self::EmojiShift),
            KEYBOARD_OPTIONS_LABEL | "keyboardOptions" => return Some(Self::KeyboardOptions),
            _ => {}
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() && !c.is_whitespace() => Some(Self::Literal(c)),
            _ => None,
        }
    }

    /// Name used for this key in logs and JSON output.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Literal(c) => c.to_string(),
            Self::Delete => "delete".to_string(),
            Self::Space => "space".to_string(),
            Self::Newline => "newline".to_string(),
            Self::NumericShift => "numericShift".to_string(),
            Self::EmojiShift => "emojiShift".to_string(),
            Self::KeyboardOptions => "keyboardOptions".to_string(),
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_action_inserts_own_char() {
        assert_eq!(
            KeyId::Literal('ض').action(),
            KeyAction::Insert("ض".to_string())
        );
    }

    #[test]
    fn test_control_actions() {
        assert_eq!(KeyId::Space.action(), KeyAction::Insert(" ".to_string()));
        assert_eq!(KeyId::Newline.action(), KeyAction::Insert("\n".to_string()));
        assert_eq!(KeyId::Delete.action(), KeyAction::DeleteBackward);
        assert_eq!(KeyId::NumericShift.action(), KeyAction::Reserved);
        assert_eq!(KeyId::EmojiShift.action(), KeyAction::Reserved);
        assert_eq!(KeyId::KeyboardOptions.action(), KeyAction::Reserved);
    }

    #[test]
    fn test_from_label_glyphs() {
        assert_eq!(KeyId::from_label("⌫"), Some(KeyId::Delete));
        assert_eq!(KeyId::from_label("بوشلوق"), Some(KeyId::Space));
        assert_eq!(KeyId::from_label("↲"), Some(KeyId::Newline));
        assert_eq!(KeyId::from_label("123"), Some(KeyId::NumericShift));
        assert_eq!(KeyId::from_label("😀"), Some(KeyId::EmojiShift));
        assert_eq!(KeyId::from_label("⌄"), Some(KeyId::KeyboardOptions));
        assert_eq!(KeyId::from_label("ی"), Some(KeyId::Literal('ی')));
    }

    #[test]
    fn test_from_label_names() {
        assert_eq!(KeyId::from_label("delete"), Some(KeyId::Delete));
        assert_eq!(KeyId::from_label("keyboardOptions"), Some(KeyId::KeyboardOptions));
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(KeyId::from_label(""), None);
        assert_eq!(KeyId::from_label("abc"), None);
        assert_eq!(KeyId::from_label(" "), None);
        assert_eq!(KeyId::from_label("\t"), None);
    }

    #[test]
    fn test_label_round_trips_through_from_label() {
        for key in [
            KeyId::Literal('گ'),
            KeyId::Delete,
            KeyId::Space,
            KeyId::Newline,
            KeyId::NumericShift,
            KeyId::EmojiShift,
            KeyId::KeyboardOptions,
        ] {
            assert_eq!(KeyId::from_label(&key.label()), Some(key));
        }
    }
}
