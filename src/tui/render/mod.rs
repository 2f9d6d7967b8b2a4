pub mod header;
pub mod help_overlay;
pub mod input_bar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use crate::ops::text_input::TextBuffer;
use crate::util::unicode;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | input (3 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Spans for a single-line text field that fits in `width` cells. With
/// `show_cursor`, the view scrolls to keep the cursor block visible.
pub(super) fn edit_spans(
    buf: &TextBuffer,
    width: usize,
    show_cursor: bool,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let text = buf.text();
    if !show_cursor {
        return vec![Span::styled(
            unicode::truncate_to_width(text, width),
            text_style,
        )];
    }
    let cursor = buf.cursor();
    let start = unicode::scroll_start_for_cursor(text, cursor, width);
    let before = &text[start..cursor];
    let used = unicode::display_width(before) + 1;
    let after = unicode::truncate_to_width(&text[cursor..], width.saturating_sub(used));
    vec![
        Span::styled(before.to_string(), text_style),
        Span::styled("\u{258C}", cursor_style),
        Span::styled(after, text_style),
    ]
}

/// Pad `spans` with background-styled spaces so that `right` ends flush
/// with `width`. `right` is dropped when it does not fit.
pub(super) fn push_right_aligned(
    spans: &mut Vec<Span<'static>>,
    right: Vec<Span<'static>>,
    width: usize,
    bg: Style,
) {
    let left_w = spans_width(spans);
    let right_w = spans_width(&right);
    if left_w + right_w <= width {
        spans.push(Span::styled(" ".repeat(width - left_w - right_w), bg));
        spans.extend(right);
    } else if left_w < width {
        spans.push(Span::styled(" ".repeat(width - left_w), bg));
    }
}

/// Total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn full_screen_shows_all_parts() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("2 tasks"));
        assert!(output.contains("New task"));
        assert!(output.contains("[ ] Buy milk"));
        assert!(output.contains("[ ] Walk dog"));
        assert!(output.contains("enter add"));
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Key Bindings"));
    }

    #[test]
    fn edit_spans_scrolls_long_text() {
        let buf = TextBuffer::with_text("abcdefghij");
        let spans = edit_spans(&buf, 5, true, Style::default(), Style::default());
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "ghij\u{258C}");
    }

    #[test]
    fn edit_spans_without_cursor_truncates() {
        let buf = TextBuffer::with_text("abcdefghij");
        let spans = edit_spans(&buf, 5, false, Style::default(), Style::default());
        assert_eq!(spans[0].content, "abcd\u{2026}");
    }

    #[test]
    fn right_aligned_drops_what_does_not_fit() {
        let mut spans = vec![Span::raw("left")];
        push_right_aligned(&mut spans, vec![Span::raw("right")], 12, Style::default());
        assert_eq!(spans_width(&spans), 12);
        assert_eq!(spans.last().unwrap().content, "right");

        let mut spans = vec![Span::raw("left")];
        push_right_aligned(&mut spans, vec![Span::raw("right")], 6, Style::default());
        assert_eq!(spans_width(&spans), 6);
        assert!(spans.iter().all(|s| s.content != "right"));
    }
}
