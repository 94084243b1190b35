//! Scripted typing command.
//!
//! Replays a list of strokes through the input controller against an empty
//! text buffer and prints the result.

use crate::cli::common::{CliError, CliResult};
use crate::input::{InputController, InputEvent, NullRenderer, TextBuffer};
use crate::models::{AlternativesSet, KeyId, Layout};
use clap::Args;
use serde::Serialize;
use tracing::warn;

/// Type a sequence of strokes and print the resulting text
#[derive(Debug, Clone, Args)]
pub struct TypeArgs {
    /// Strokes: `LABEL` taps a key, `LABEL:N` long-presses and releases on
    /// alternative N, `LABEL:-` releases outside the overlay, `LABEL:^`
    /// cancels the long press
    #[arg(value_name = "STROKE", required = true)]
    pub strokes: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// How a long press ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Released over the given alternative
    On(usize),
    /// Released outside every alternative
    Outside,
    /// Interrupted before release
    Cancel,
}

/// One scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Press and release without a long press
    Tap(KeyId),
    /// Long press, then release or cancel
    LongPress(KeyId, Release),
}

impl Stroke {
    /// Parses a stroke; `None` when the key label is unknown.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if let Some((label, suffix)) = input.rsplit_once(':') {
            let release = match suffix {
                "-" => Some(Release::Outside),
                "^" => Some(Release::Cancel),
                n => n.parse().ok().map(Release::On),
            };
            if let Some(release) = release {
                return KeyId::from_label(label).map(|key| Self::LongPress(key, release));
            }
        }

        KeyId::from_label(input).map(Self::Tap)
    }

    /// Key the stroke acts on.
    #[must_use]
    pub const fn key(self) -> KeyId {
        match self {
            Self::Tap(key) | Self::LongPress(key, _) => key,
        }
    }

    /// Gesture events this stroke produces, in order.
    #[must_use]
    pub fn events(self) -> Vec<InputEvent> {
        match self {
            Self::Tap(key) => vec![InputEvent::Tap(key)],
            Self::LongPress(key, Release::On(index)) => vec![
                InputEvent::LongPressBegin(key),
                InputEvent::LongPressMove(Some(index)),
                InputEvent::LongPressEnd(Some(index)),
            ],
            Self::LongPress(key, Release::Outside) => vec![
                InputEvent::LongPressBegin(key),
                InputEvent::LongPressEnd(None),
            ],
            Self::LongPress(key, Release::Cancel) => vec![
                InputEvent::LongPressBegin(key),
                InputEvent::LongPressCancel,
            ],
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TypeResult {
    text: String,
    strokes: usize,
    skipped: Vec<String>,
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self) -> CliResult<()> {
        let result = replay(&self.strokes);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", result.text);
            if !result.skipped.is_empty() {
                eprintln!("Skipped unknown keys: {}", result.skipped.join(" "));
            }
        }

        Ok(())
    }
}

fn replay(strokes: &[String]) -> TypeResult {
    let layout = Layout::arabic();
    let mut controller = InputController::new(AlternativesSet::arabic());
    let mut buffer = TextBuffer::new();
    let mut renderer = NullRenderer;
    let mut skipped = Vec::new();
    let mut applied = 0;

    for raw in strokes {
        let stroke = Stroke::parse(raw).filter(|s| layout.position_of(s.key()).is_some());
        let Some(stroke) = stroke else {
            warn!(stroke = %raw, "Unknown key, skipping");
            skipped.push(raw.clone());
            continue;
        };

        for event in stroke.events() {
            controller.handle(event, &mut buffer, &mut renderer);
        }
        applied += 1;
    }

    TypeResult {
        text: buffer.text().to_string(),
        strokes: applied,
        skipped,
    }
}
