//! Text sink: the host text buffer the keyboard edits.

/// Zero-width joiner, glues emoji sequences into a single grapheme.
const ZWJ: char = '\u{200D}';

/// Host text buffer the keyboard edits.
///
/// Both operations are total: inserting never fails and deleting at the start
/// of the buffer does nothing.
pub trait TextSink {
    /// Inserts `text` at the cursor and moves the cursor past it.
    fn insert(&mut self, text: &str);

    /// Removes one grapheme before the cursor; no-op at the start.
    fn delete_backward(&mut self);
}

/// In-memory text buffer with a cursor, used by the terminal host and tests.
///
/// Backward delete and cursor moves approximate grapheme clusters for
/// Arabic-script input only: a base character with its harakat, plus emoji
/// joined by ZWJ. Regional-indicator flags and Hangul or Indic clusters are
/// not handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Byte offset of the cursor, always on a char boundary
    cursor: usize,
}

impl TextBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Moves the cursor one grapheme towards the start.
    pub fn move_left(&mut self) {
        self.cursor = previous_grapheme_start(&self.text, self.cursor);
    }

    /// Moves the cursor one character towards the end.
    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
            // Keep trailing marks attached to their base character
            while let Some(next) = self.text[self.cursor..].chars().next() {
                if !is_extender(next) {
                    break;
                }
                self.cursor += next.len_utf8();
            }
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

impl TextSink for TextBuffer {
    fn insert(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn delete_backward(&mut self) {
        let start = previous_grapheme_start(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }
}

/// Characters that attach to the preceding base character: Arabic harakat,
/// superscript alef, general combining marks, variation selectors and ZWJ.
fn is_extender(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E4}'
        | '\u{FE00}'..='\u{FE0F}'
        | '\u{1F3FB}'..='\u{1F3FF}'
        | ZWJ
    )
}

/// Byte offset where the grapheme ending at `end` starts.
///
/// Approximates grapheme clusters as a base character plus trailing
/// extenders, with ZWJ joining two such clusters.
fn previous_grapheme_start(text: &str, end: usize) -> usize {
    let mut start = end;
    let mut chars = text[..end].char_indices().rev().peekable();

    while let Some((idx, c)) = chars.next() {
        start = idx;
        if is_extender(c) {
            continue;
        }
        match chars.peek() {
            Some(&(joiner_idx, ZWJ)) => {
                start = joiner_idx;
                chars.next();
            }
            _ => break,
        }
    }

    start
}
