//! Static keyboard layout: ordered rows of keys.
//!
//! The layout is compiled in. The last row is the control row (shift keys,
//! space, newline); its keys and the delete key are drawn in the "special"
//! style. Styling and sizing themselves belong to the renderer.

use anyhow::Result;

use super::key::KeyId;

/// Letter rows of the Arabic-script Azerbaijani Turkish keyboard.
const LETTER_ROWS: [&str; 3] = [
    "ضصثقفغعهخحج",
    "شسیبلاتنمکگ",
    "ظطژزرذدپوچ",
];

/// A single key in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// What the key is
    pub id: KeyId,
    /// Drawn with the special-key style (control row keys and delete)
    pub special: bool,
}

impl Key {
    /// Creates a regular (non-special) key.
    #[must_use]
    pub const fn regular(id: KeyId) -> Self {
        Self { id, special: false }
    }

    /// Creates a special-styled key.
    #[must_use]
    pub const fn special(id: KeyId) -> Self {
        Self { id, special: true }
    }
}

/// Ordered sequence of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Keys from left to right as drawn
    pub keys: Vec<Key>,
}

impl Row {
    /// Creates a row from its keys.
    #[must_use]
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Number of keys in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the row has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Ordered sequence of rows; the last row is the control row.
///
/// # Validation
///
/// - At least one row
/// - Every row has at least one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Row>,
}

impl Layout {
    /// Creates a layout from rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or a row is empty.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Layout must contain at least one row");
        }

        if let Some(index) = rows.iter().position(Row::is_empty) {
            anyhow::bail!("Layout row {} has no keys", index);
        }

        Ok(Self { rows })
    }

    /// The fixed Arabic-script Azerbaijani Turkish layout (4 rows).
    #[must_use]
    pub fn arabic() -> Self {
        let mut rows: Vec<Row> = LETTER_ROWS
            .iter()
            .map(|letters| {
                Row::new(
                    letters
                        .chars()
                        .map(|c| Key::regular(KeyId::Literal(c)))
                        .collect(),
                )
            })
            .collect();

        // Delete closes the third row
        rows[2].keys.push(Key::special(KeyId::Delete));

        rows.push(Row::new(vec![
            Key::special(KeyId::NumericShift),
            Key::special(KeyId::EmojiShift),
            Key::special(KeyId::Space),
            Key::special(KeyId::KeyboardOptions),
            Key::special(KeyId::Newline),
        ]));

        Self { rows }
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns true if `row_index` is the control row (the last row).
    #[must_use]
    pub fn is_control_row(&self, row_index: usize) -> bool {
        row_index + 1 == self.rows.len()
    }

    /// Gets the key at the given row and column.
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<&Key> {
        self.rows.get(row).and_then(|r| r.keys.get(col))
    }

    /// Finds the (row, column) of the first key with the given id.
    #[must_use]
    pub fn position_of(&self, id: KeyId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_idx, row)| {
            row.keys
                .iter()
                .position(|k| k.id == id)
                .map(|col| (row_idx, col))
        })
    }

    /// Iterates over every key, top to bottom, left to right.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|r| r.keys.iter())
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::arabic()
    }
}
