use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

use super::text::apply_text_key;

/// Keys while the new-task input has focus
pub(super) fn handle_add_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_new_task();
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => {
            app.focus = Focus::List;
        }
        _ => {
            apply_text_key(&mut app.input.buffer, key);
        }
    }
}
