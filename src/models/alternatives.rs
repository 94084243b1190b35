//! Long-press alternatives table.

use std::collections::HashMap;

use super::key::KeyId;

/// Alternatives offered for a base key on long press.
///
/// Only literal keys can have alternatives, and every entry is non-empty with
/// the base character first. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativesSet {
    entries: HashMap<char, Vec<String>>,
}

impl AlternativesSet {
    /// The fixed table: yeh and alef.
    #[must_use]
    pub fn arabic() -> Self {
        let mut entries = HashMap::new();
        entries.insert('ی', strings(&["ی", "ئ", "ي"]));
        entries.insert('ا', strings(&["ا", "آ", "أ", "إ"]));
        Self { entries }
    }

    /// Alternatives for `key`, or `None` when the key opens no overlay.
    #[must_use]
    pub fn get(&self, key: KeyId) -> Option<&[String]> {
        match key {
            KeyId::Literal(c) => self
                .entries
                .get(&c)
                .map(Vec::as_slice)
                .filter(|alts| !alts.is_empty()),
            _ => None,
        }
    }

    /// Returns true if a long press on `key` opens an overlay.
    #[must_use]
    pub fn has_alternatives(&self, key: KeyId) -> bool {
        self.get(key).is_some()
    }
}

impl Default for AlternativesSet {
    fn default() -> Self {
        Self::arabic()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
