//! Press tracking: turns pointer down/drag/up plus elapsed time into
//! [`InputEvent`]s.
//!
//! A press becomes a long press once it has been held for the threshold on a
//! key that has alternatives. A press that never becomes a long press produces
//! exactly one tap, and only when released over the key it started on. A long
//! press never produces a tap.

use std::time::{Duration, Instant};

use crate::input::InputEvent;
use crate::models::KeyId;

/// What lies under the pointer, resolved by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTarget {
    /// Key under the pointer
    pub key: Option<KeyId>,
    /// Alternative cell under the pointer, when an overlay is shown
    pub alternative: Option<usize>,
}

impl PointerTarget {
    /// Pointer over a key.
    #[must_use]
    pub const fn key(key: KeyId) -> Self {
        Self {
            key: Some(key),
            alternative: None,
        }
    }

    /// Pointer over an alternative cell.
    #[must_use]
    pub const fn alternative(index: usize) -> Self {
        Self {
            key: None,
            alternative: Some(index),
        }
    }

    /// Pointer over nothing.
    #[must_use]
    pub const fn nothing() -> Self {
        Self {
            key: None,
            alternative: None,
        }
    }
}

/// Phase of the current press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    /// Held, not yet a long press
    Pressed,
    /// Promoted to a long press; the overlay owns the pointer
    LongPress,
}

#[derive(Debug, Clone, Copy)]
struct ActivePress {
    key: KeyId,
    started: Instant,
    phase: PressPhase,
}

/// Tracks at most one press at a time.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    threshold: Duration,
    press: Option<ActivePress>,
}

impl GestureTracker {
    /// Creates a tracker with the given long-press threshold.
    #[must_use]
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            press: None,
        }
    }

    /// Long-press threshold.
    #[must_use]
    pub const fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Key currently held, if any.
    #[must_use]
    pub fn pressed_key(&self) -> Option<KeyId> {
        self.press.map(|p| p.key)
    }

    /// Phase of the current press.
    #[must_use]
    pub fn phase(&self) -> Option<PressPhase> {
        self.press.map(|p| p.phase)
    }

    /// Pointer went down.
    ///
    /// A press left over from a lost release is dropped; if it was a long
    /// press the overlay is cancelled.
    pub fn pointer_down(&mut self, target: PointerTarget, now: Instant) -> Option<InputEvent> {
        let stale = self.cancel();
        self.press = target.key.map(|key| ActivePress {
            key,
            started: now,
            phase: PressPhase::Pressed,
        });
        stale
    }

    /// Pointer moved with the button held.
    pub fn pointer_drag(&self, target: PointerTarget) -> Option<InputEvent> {
        match self.press {
            Some(ActivePress {
                phase: PressPhase::LongPress,
                ..
            }) => Some(InputEvent::LongPressMove(target.alternative)),
            _ => None,
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, target: PointerTarget) -> Option<InputEvent> {
        let press = self.press.take()?;
        match press.phase {
            PressPhase::LongPress => Some(InputEvent::LongPressEnd(target.alternative)),
            PressPhase::Pressed if target.key == Some(press.key) => {
                Some(InputEvent::Tap(press.key))
            }
            PressPhase::Pressed => None,
        }
    }

    /// Promotes the current press to a long press once the threshold passes.
    ///
    /// `has_alternatives` decides which keys can be long-pressed; a key
    /// without alternatives stays a plain press until released.
    pub fn tick<F>(&mut self, now: Instant, has_alternatives: F) -> Option<InputEvent>
    where
        F: Fn(KeyId) -> bool,
    {
        let press = self.press.as_mut()?;
        if press.phase != PressPhase::Pressed
            || now.saturating_duration_since(press.started) < self.threshold
            || !has_alternatives(press.key)
        {
            return None;
        }

        press.phase = PressPhase::LongPress;
        Some(InputEvent::LongPressBegin(press.key))
    }

    /// Abandons the current press.
    pub fn cancel(&mut self) -> Option<InputEvent> {
        match self.press.take()?.phase {
            PressPhase::LongPress => Some(InputEvent::LongPressCancel),
            PressPhase::Pressed => None,
        }
    }
}
