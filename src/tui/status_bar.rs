//! Status bar widget for displaying the last action and key help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{App, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let mut lines = vec![Line::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(theme.text),
        ))];

        if app.config.ui.show_help {
            let help = if app.controller.overlay().is_some() {
                "drag to choose | release: insert | Esc: cancel"
            } else {
                "click: type | hold ی / ا: alternatives | ←/→: move cursor | Esc: quit"
            };
            lines.push(Line::from(vec![
                Span::styled(
                    "Help: ",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(help, Style::default().fg(theme.text_muted)),
            ]));
        }

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(widget, area);
    }
}
