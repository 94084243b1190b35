//! Key-input state machine.
//!
//! Turns tap and long-press gestures into text-sink commands and owns the
//! transient alternatives overlay. Every operation is total: events that make
//! no sense in the current state are ignored rather than reported.

use tracing::{debug, info, warn};

use super::renderer::Renderer;
use super::sink::TextSink;
use crate::models::{AlternativesSet, KeyAction, KeyId};

/// Gesture events forwarded by the renderer.
///
/// Pointer positions during a long press arrive already hit-tested: the
/// payload is the index of the alternative under the pointer, or `None` when
/// the pointer is outside every alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A plain press released on the key
    Tap(KeyId),
    /// A press on the key was held long enough to count as a long press
    LongPressBegin(KeyId),
    /// The pointer moved during a long press
    LongPressMove(Option<usize>),
    /// The pointer was released during a long press
    LongPressEnd(Option<usize>),
    /// The long press was interrupted
    LongPressCancel,
}

/// State of an open alternatives overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySession {
    source: KeyId,
    alternatives: Vec<String>,
    highlighted: Option<usize>,
}

impl OverlaySession {
    fn new(source: KeyId, alternatives: Vec<String>) -> Self {
        Self {
            source,
            alternatives,
            highlighted: None,
        }
    }

    /// Key the long press started on.
    #[must_use]
    pub const fn source(&self) -> KeyId {
        self.source
    }

    /// Alternatives in display order.
    #[must_use]
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Index of the highlighted alternative, if the pointer is over one.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Text of the highlighted alternative.
    #[must_use]
    pub fn highlighted_text(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.alternatives.get(i))
            .map(String::as_str)
    }

    /// Drops indices that do not name an alternative.
    fn resolve(&self, hit: Option<usize>) -> Option<usize> {
        hit.filter(|&i| i < self.alternatives.len())
    }
}

/// Dispatches gestures to text-edit commands and manages the overlay.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    alternatives: AlternativesSet,
    overlay: Option<OverlaySession>,
}

impl InputController {
    /// Creates a controller with the given alternatives table.
    #[must_use]
    pub fn new(alternatives: AlternativesSet) -> Self {
        Self {
            alternatives,
            overlay: None,
        }
    }

    /// The open overlay, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<&OverlaySession> {
        self.overlay.as_ref()
    }

    /// Returns true if a long press on `key` would open an overlay.
    #[must_use]
    pub fn has_alternatives(&self, key: KeyId) -> bool {
        self.alternatives.has_alternatives(key)
    }

    /// Single entry point for gesture events.
    ///
    /// Handles the event to completion, including every sink and renderer
    /// call, before returning.
    pub fn handle<S, R>(&mut self, event: InputEvent, sink: &mut S, renderer: &mut R)
    where
        S: TextSink + ?Sized,
        R: Renderer + ?Sized,
    {
        debug!(?event, "Dispatching input event");
        match event {
            InputEvent::Tap(key) => self.on_tap(key, sink),
            InputEvent::LongPressBegin(key) => self.on_long_press_begin(key, renderer),
            InputEvent::LongPressMove(hit) => self.on_long_press_move(hit, renderer),
            InputEvent::LongPressEnd(hit) => self.on_long_press_end(hit, sink, renderer),
            InputEvent::LongPressCancel => self.on_long_press_cancel(renderer),
        }
    }

    /// Applies the key's action: at most one sink command.
    pub fn on_tap<S: TextSink + ?Sized>(&mut self, key: KeyId, sink: &mut S) {
        if self.overlay.is_some() {
            // The long press owns the pointer; a tap here is a renderer bug
            warn!(%key, "Ignoring tap while alternatives overlay is open");
            return;
        }

        match key.action() {
            KeyAction::Insert(text) => {
                debug!(%key, text = %text.escape_debug(), "Insert");
                sink.insert(&text);
            }
            KeyAction::DeleteBackward => {
                debug!("Delete backward");
                sink.delete_backward();
            }
            KeyAction::Reserved => {
                debug!(%key, "Reserved key, nothing to do");
            }
        }
    }

    /// Opens the overlay if `key` has alternatives.
    ///
    /// Any overlay still open from an earlier gesture is torn down first.
    pub fn on_long_press_begin<R: Renderer + ?Sized>(&mut self, key: KeyId, renderer: &mut R) {
        if self.overlay.take().is_some() {
            warn!("Replacing stale alternatives overlay");
            renderer.hide_overlay();
        }

        let Some(alternatives) = self.alternatives.get(key) else {
            debug!(%key, "No alternatives for key");
            return;
        };

        let session = OverlaySession::new(key, alternatives.to_vec());
        info!(%key, count = session.alternatives.len(), "Opening alternatives overlay");
        renderer.show_overlay(&session);
        self.overlay = Some(session);
    }

    /// Moves the highlight to the alternative under the pointer.
    pub fn on_long_press_move<R: Renderer + ?Sized>(
        &mut self,
        hit: Option<usize>,
        renderer: &mut R,
    ) {
        let Some(session) = self.overlay.as_mut() else {
            return;
        };

        let hit = session.resolve(hit);
        if session.highlighted != hit {
            session.highlighted = hit;
            debug!(highlighted = ?hit, "Overlay highlight changed");
            renderer.update_highlight(session);
        }
    }

    /// Commits the alternative under the release point and closes the overlay.
    ///
    /// Releasing outside every alternative inserts nothing, not even the base
    /// character.
    pub fn on_long_press_end<S, R>(&mut self, hit: Option<usize>, sink: &mut S, renderer: &mut R)
    where
        S: TextSink + ?Sized,
        R: Renderer + ?Sized,
    {
        let Some(session) = self.overlay.take() else {
            return;
        };

        match session.resolve(hit).map(|i| session.alternatives[i].as_str()) {
            Some(text) => {
                debug!(source = %session.source, text, "Insert alternative");
                sink.insert(text);
            }
            None => debug!(source = %session.source, "Released outside alternatives"),
        }

        info!("Closing alternatives overlay");
        renderer.hide_overlay();
    }

    /// Closes the overlay without inserting anything.
    pub fn on_long_press_cancel<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.overlay.take().is_some() {
            info!("Alternatives overlay cancelled");
            renderer.hide_overlay();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{NullRenderer, TextBuffer};

    fn controller() -> InputController {
        InputController::new(AlternativesSet::arabic())
    }

    #[test]
    fn test_tap_literal_inserts() {
        let mut c = controller();
        let mut buffer = TextBuffer::new();
        c.handle(InputEvent::Tap(KeyId::Literal('ق')), &mut buffer, &mut NullRenderer);
        assert_eq!(buffer.text(), "ق");
    }

    #[test]
    fn test_tap_reserved_keys_do_nothing() {
        let mut c = controller();
        let mut buffer = TextBuffer::with_text("x");
        for key in [KeyId::NumericShift, KeyId::EmojiShift, KeyId::KeyboardOptions] {
            c.handle(InputEvent::Tap(key), &mut buffer, &mut NullRenderer);
        }
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_long_press_begin_opens_session() {
        let mut c = controller();
        c.on_long_press_begin(KeyId::Literal('ی'), &mut NullRenderer);
        let session = c.overlay().unwrap();
        assert_eq!(session.source(), KeyId::Literal('ی'));
        assert_eq!(session.alternatives(), &["ی", "ئ", "ي"]);
        assert_eq!(session.highlighted(), None);
    }

    #[test]
    fn test_long_press_begin_without_alternatives() {
        let mut c = controller();
        c.on_long_press_begin(KeyId::Literal('ب'), &mut NullRenderer);
        assert!(c.overlay().is_none());
    }

    #[test]
    fn test_move_updates_highlight_and_ignores_out_of_range() {
        let mut c = controller();
        c.on_long_press_begin(KeyId::Literal('ا'), &mut NullRenderer);
        c.on_long_press_move(Some(2), &mut NullRenderer);
        assert_eq!(c.overlay().unwrap().highlighted_text(), Some("أ"));

        c.on_long_press_move(Some(9), &mut NullRenderer);
        assert_eq!(c.overlay().unwrap().highlighted(), None);
    }

    #[test]
    fn test_end_inserts_alternative_and_closes() {
        let mut c = controller();
        let mut buffer = TextBuffer::new();
        c.on_long_press_begin(KeyId::Literal('ا'), &mut NullRenderer);
        c.on_long_press_end(Some(1), &mut buffer, &mut NullRenderer);
        assert_eq!(buffer.text(), "آ");
        assert!(c.overlay().is_none());
    }

    #[test]
    fn test_end_without_session_is_noop() {
        let mut c = controller();
        let mut buffer = TextBuffer::new();
        c.on_long_press_end(Some(0), &mut buffer, &mut NullRenderer);
        c.on_long_press_move(Some(0), &mut NullRenderer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_tap_ignored_while_overlay_open() {
        let mut c = controller();
        let mut buffer = TextBuffer::new();
        c.on_long_press_begin(KeyId::Literal('ی'), &mut NullRenderer);
        c.on_tap(KeyId::Literal('ب'), &mut buffer);
        assert!(buffer.is_empty());
        assert!(c.overlay().is_some());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut c = controller();
        c.on_long_press_cancel(&mut NullRenderer);
        c.on_long_press_begin(KeyId::Literal('ی'), &mut NullRenderer);
        c.on_long_press_cancel(&mut NullRenderer);
        c.on_long_press_cancel(&mut NullRenderer);
        assert!(c.overlay().is_none());
    }
}
