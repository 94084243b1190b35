//! Renderer seam: overlay display signals sent by the input controller.
//!
//! The renderer owns all geometry. It resolves pointer positions against the
//! alternative cells it drew and hands the controller a resolved index, so the
//! controller never sees screen coordinates.

use super::controller::OverlaySession;

/// Receives overlay display signals from the [`InputController`].
///
/// The session passed in is a read-only projection; the controller remains its
/// only owner.
///
/// [`InputController`]: super::InputController
pub trait Renderer {
    /// Show the overlay for `session`, anchored above its source key and
    /// `session.alternatives().len()` key widths wide.
    fn show_overlay(&mut self, session: &OverlaySession);

    /// The highlighted alternative changed.
    fn update_highlight(&mut self, session: &OverlaySession);

    /// Remove the overlay.
    fn hide_overlay(&mut self);
}

/// Renderer that ignores every signal, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn show_overlay(&mut self, _session: &OverlaySession) {}

    fn update_highlight(&mut self, _session: &OverlaySession) {}

    fn hide_overlay(&mut self) {}
}
