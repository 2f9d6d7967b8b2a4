use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

/// Keys on the task list when the cursor row is on display
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to_bottom(),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.toggle_at_cursor();
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.edit_at_cursor();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.remove_at_cursor();
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.focus = Focus::Input,
        KeyCode::Esc => app.focus = Focus::Input,
        _ => {}
    }
}
