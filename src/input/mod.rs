//! Key-input handling: the gesture state machine and its two collaborators,
//! the text sink it edits and the renderer it signals.

pub mod controller;
pub mod renderer;
pub mod sink;

pub use controller::{InputController, InputEvent, OverlaySession};
pub use renderer::{NullRenderer, Renderer};
pub use sink::{TextBuffer, TextSink};
