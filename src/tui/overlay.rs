//! Alternatives overlay: the renderer half of the long-press popup.
//!
//! [`OverlayPresenter`] receives the controller's show/highlight/hide signals,
//! places the popup above the source key and answers hit tests against the
//! cells it placed. It never changes the session it draws.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use super::geometry::{KeyboardGeometry, OverlayGeometry};
use super::Theme;
use crate::input::{OverlaySession, Renderer};

/// Renderer-side overlay state.
#[derive(Debug, Clone, Default)]
pub struct OverlayPresenter {
    keyboard: KeyboardGeometry,
    bounds: Rect,
    geometry: Option<OverlayGeometry>,
    highlighted: Option<usize>,
}

impl OverlayPresenter {
    /// Creates a presenter with no keyboard laid out yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where the keys were drawn and the area the popup may use.
    pub fn set_keyboard(&mut self, keyboard: KeyboardGeometry, bounds: Rect) {
        self.keyboard = keyboard;
        self.bounds = bounds;
    }

    /// Current key frames.
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardGeometry {
        &self.keyboard
    }

    /// Placement of the visible overlay.
    #[must_use]
    pub fn geometry(&self) -> Option<&OverlayGeometry> {
        self.geometry.as_ref()
    }

    /// Returns true while an overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.geometry.is_some()
    }

    /// Index of the alternative under the given cell.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.geometry.as_ref()?.hit_test(column, row)
    }

    /// Draws the overlay for `session`.
    pub fn render(&self, f: &mut Frame, session: &OverlaySession, theme: &Theme) {
        let Some(geometry) = &self.geometry else {
            return;
        };

        f.render_widget(Clear, geometry.area());

        for (index, (text, cell)) in session
            .alternatives()
            .iter()
            .zip(geometry.cells())
            .enumerate()
        {
            let selected = self.highlighted == Some(index);
            let style = if selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.key_label).bg(theme.key_face)
            };

            let widget = Paragraph::new(text.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(widget, *cell);
        }
    }
}

impl Renderer for OverlayPresenter {
    fn show_overlay(&mut self, session: &OverlaySession) {
        // A key that was never drawn has no anchor; anchor at the top left
        let source = self
            .keyboard
            .frame_of(session.source())
            .unwrap_or(Rect::new(self.bounds.x, self.bounds.y, 1, 1));

        let geometry = OverlayGeometry::compute(source, session.alternatives().len(), self.bounds);
        debug!(area = ?geometry.area(), "Overlay placed");
        self.geometry = Some(geometry);
        self.highlighted = session.highlighted();
    }

    fn update_highlight(&mut self, session: &OverlaySession) {
        self.highlighted = session.highlighted();
    }

    fn hide_overlay(&mut self) {
        self.geometry = None;
        self.highlighted = None;
    }
}
