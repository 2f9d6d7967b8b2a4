use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::push_right_aligned;

/// Render the header: title, live task count, separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        "\u{25B6} tasks",
        Style::default()
            .fg(app.theme.accent)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    )];
    let counts = vec![Span::styled(
        format!(
            "{} \u{00B7} {} done ",
            app.count_label(),
            app.tasks.done_count()
        ),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )];
    push_right_aligned(&mut spans, counts, width, bg);

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator]).style(bg);
    frame.render_widget(paragraph, area);
}
