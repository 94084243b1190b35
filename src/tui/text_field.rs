//! Host screen: a greeting and a single text field the keyboard types into.

use ratatui::{
    layout::{Alignment, Constraint, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::input::TextBuffer;

/// Placeholder shown while the field is empty.
const PLACEHOLDER: &str = "test";

/// Cursor glyph drawn at the insertion point.
const CURSOR: &str = "▏";

/// Host screen widget
pub struct TextFieldWidget;

impl TextFieldWidget {
    /// Render the greeting and the text field
    pub fn render(f: &mut Frame, area: Rect, buffer: &TextBuffer, theme: &Theme) {
        let chunks = RatatuiLayout::vertical([
            Constraint::Length(2), // Greeting
            Constraint::Min(3),    // Field
        ])
        .split(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled("🌐", Style::default().fg(theme.primary))),
            Line::from("Hello, world!"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text).bg(theme.background));
        f.render_widget(greeting, chunks[0]);

        let field = Paragraph::new(Self::field_lines(buffer, theme))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(field, chunks[1]);
    }

    /// Splits the buffer into lines with the cursor inserted.
    fn field_lines(buffer: &TextBuffer, theme: &Theme) -> Vec<Line<'static>> {
        let cursor_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);

        if buffer.is_empty() {
            return vec![Line::from(vec![
                Span::styled(CURSOR, cursor_style),
                Span::styled(PLACEHOLDER, Style::default().fg(theme.text_muted)),
            ])];
        }

        let (before, after) = buffer.text().split_at(buffer.cursor());
        let mut lines = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();

        push_text(before, &mut lines, &mut current);
        current.push(Span::styled(CURSOR, cursor_style));
        push_text(after, &mut lines, &mut current);
        lines.push(Line::from(current));

        lines
    }
}

/// Appends `text` to the current line, starting a new line at each `\n`.
fn push_text(text: &str, lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    let mut parts = text.split('\n').peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            current.push(Span::raw(part.to_string()));
        }
        if parts.peek().is_some() {
            lines.push(Line::from(std::mem::take(current)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextSink;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_empty_buffer_shows_placeholder() {
        let lines = TextFieldWidget::field_lines(&TextBuffer::new(), &Theme::dark());
        assert_eq!(plain(&lines), vec![format!("{CURSOR}{PLACEHOLDER}")]);
    }

    #[test]
    fn test_cursor_at_end() {
        let buffer = TextBuffer::with_text("سلام");
        let lines = TextFieldWidget::field_lines(&buffer, &Theme::dark());
        assert_eq!(plain(&lines), vec![format!("سلام{CURSOR}")]);
    }

    #[test]
    fn test_newlines_split_lines() {
        let mut buffer = TextBuffer::new();
        buffer.insert("ا\nب\n");
        let lines = TextFieldWidget::field_lines(&buffer, &Theme::dark());
        assert_eq!(
            plain(&lines),
            vec!["ا".to_string(), "ب".to_string(), CURSOR.to_string()]
        );
    }

    #[test]
    fn test_cursor_in_middle() {
        let mut buffer = TextBuffer::with_text("اب");
        buffer.move_left();
        let lines = TextFieldWidget::field_lines(&buffer, &Theme::dark());
        assert_eq!(plain(&lines), vec![format!("ا{CURSOR}ب")]);
    }
}
