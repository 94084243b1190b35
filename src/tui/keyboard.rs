//! Keyboard widget for rendering the key rows

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::geometry::KeyboardGeometry;
use super::Theme;
use crate::models::KeyId;

/// Keyboard widget renders every key at the frame computed for it
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Render the keyboard tray and its keys
    pub fn render(
        f: &mut Frame,
        area: Rect,
        geometry: &KeyboardGeometry,
        pressed: Option<KeyId>,
        theme: &Theme,
    ) {
        let tray = Block::default().style(Style::default().bg(theme.keyboard_bg));
        f.render_widget(tray, area);

        for frame in geometry.frames() {
            let face = theme.key_face_for(frame.special, pressed == Some(frame.key));
            let style = Style::default().fg(theme.key_label).bg(face);

            let key = Paragraph::new(frame.key.label())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.keyboard_bg).bg(face)),
                );
            f.render_widget(key, frame.rect);
        }
    }
}
