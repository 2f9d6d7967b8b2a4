use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, StatusKind};

use super::push_right_aligned;

/// Key hints for the current focus and row mode
pub fn key_hints(app: &App) -> &'static str {
    match app.focus {
        Focus::Input => "enter add  tab list  ctrl-c quit",
        Focus::List if app.cursor_row_editing() => "enter save  esc cancel  \u{2191}\u{2193} rows",
        Focus::List => "space toggle  e edit  d delete  a add  ? help  q quit",
    }
}

/// Render the status row (bottom of screen): transient message on the
/// left, key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let width = area.width as usize;

    let mut spans: Vec<Span<'static>> = Vec::new();
    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Error => app.theme.red,
            StatusKind::Info => app.theme.dim,
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).bg(bg),
        ));
    }

    let hints = if app.show_key_hints {
        vec![Span::styled(
            format!("{} ", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        )]
    } else {
        Vec::new()
    };
    push_right_aligned(&mut spans, hints, width, bg_style);

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
}
