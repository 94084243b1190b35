//! Data models for the keyboard: key identifiers, the static layout and the
//! long-press alternatives table.
//!
//! Models are independent of the UI and of input handling.

pub mod alternatives;
pub mod key;
pub mod layout;

// Re-export all model types
pub use alternatives::AlternativesSet;
pub use key::{KeyAction, KeyId};
pub use layout::{Key, Layout, Row};
