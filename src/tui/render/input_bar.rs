use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};

use super::edit_spans;

const PLACEHOLDER: &str = "What needs doing?";

/// Render the bordered new-task input
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let bg = app.theme.background;
    let border_color = if focused {
        app.theme.accent
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            " New task ",
            Style::default().fg(border_color).bg(bg),
        ));
    let inner = block.inner(area);
    let width = inner.width.saturating_sub(1) as usize;

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let cursor_style = Style::default().fg(app.theme.accent).bg(bg);

    let mut spans = vec![Span::styled(" ", text_style)];
    if app.input.buffer.text().is_empty() {
        if focused {
            spans.push(Span::styled("\u{258C}", cursor_style));
        }
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(edit_spans(
            &app.input.buffer,
            width,
            focused,
            text_style,
            cursor_style,
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_input_shows_placeholder() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(40, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("\u{258C}What needs doing?"));
    }

    #[test]
    fn typed_text_with_cursor() {
        let mut app = app_with_tasks(&[]);
        app.input.buffer.insert_str("Buy milk");
        let output = render_to_string(40, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("Buy milk\u{258C}"));
        assert!(!output.contains("What needs doing?"));
    }

    #[test]
    fn unfocused_input_has_no_cursor() {
        let mut app = app_with_tasks(&[]);
        app.focus = Focus::List;
        app.input.buffer.insert_str("half");
        let output = render_to_string(40, 3, |frame, area| {
            render_input_bar(frame, &app, area);
        });
        assert!(output.contains("half"));
        assert!(!output.contains('\u{258C}'));
    }
}
