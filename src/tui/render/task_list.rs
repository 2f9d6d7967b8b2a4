use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::row_ops::{RowMode, TaskRow};
use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::{edit_spans, push_right_aligned};

const DISPLAY_CONTROLS: &str = "e edit  d delete ";
const EDIT_CONTROLS: &str = "enter save  esc close ";

/// Render the scrollable task list
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = Style::default().bg(app.theme.background);

    if app.rows.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    app.scroll_to_cursor(visible_height);

    let width = area.width as usize;
    let list_focused = app.focus == Focus::List;
    let lines: Vec<Line> = app
        .rows
        .rows()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, row)| row_line(app, row, list_focused && i == app.cursor, width))
        .collect();

    let paragraph = Paragraph::new(lines).style(bg);
    frame.render_widget(paragraph, area);
}

fn row_line(app: &App, row: &TaskRow, is_cursor: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let row_bg = if is_cursor {
        theme.highlight
    } else {
        theme.background
    };
    let bg = Style::default().bg(row_bg);

    let marker_style = if row.done {
        Style::default()
            .fg(theme.done)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.marker).bg(row_bg)
    };
    let mut spans = vec![
        Span::styled(" ", bg),
        Span::styled(if row.done { "[x]" } else { "[ ]" }, marker_style),
        Span::styled(" ", bg),
    ];

    // Controls for the row's current mode: edit rows always show theirs,
    // display rows only under the cursor.
    let controls = match &row.mode {
        RowMode::Editing { .. } => Some(EDIT_CONTROLS),
        RowMode::Display if is_cursor => Some(DISPLAY_CONTROLS),
        RowMode::Display => None,
    };
    let controls_w = controls.map_or(0, unicode::display_width);
    let title_w = width
        .saturating_sub(super::spans_width(&spans))
        .saturating_sub(controls_w + 1);

    match &row.mode {
        RowMode::Display => {
            let mut style = Style::default().fg(theme.title_color(row.done)).bg(row_bg);
            if row.done {
                style = style.add_modifier(Modifier::CROSSED_OUT);
            }
            spans.push(Span::styled(
                unicode::truncate_to_width(&row.title, title_w),
                style,
            ));
        }
        RowMode::Editing { draft } => {
            let text_style = Style::default()
                .fg(theme.text)
                .bg(row_bg)
                .add_modifier(Modifier::UNDERLINED);
            let cursor_style = Style::default().fg(theme.accent).bg(row_bg);
            spans.extend(edit_spans(draft, title_w, is_cursor, text_style, cursor_style));
        }
    }

    let right = controls
        .map(|c| vec![Span::styled(c, Style::default().fg(theme.control).bg(row_bg))])
        .unwrap_or_default();
    push_right_aligned(&mut spans, right, width, bg);
    Line::from(spans)
}
