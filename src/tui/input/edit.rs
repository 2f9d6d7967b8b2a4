use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::text::apply_text_key;

/// Keys on a row that is in edit mode. Only save and close are offered;
/// moving the cursor away leaves the edit open.
pub(super) fn handle_row_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.commit_at_cursor();
        }
        KeyCode::Esc => {
            app.cancel_at_cursor();
        }
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        _ => {
            app.edit_draft_at_cursor(|draft| {
                apply_text_key(draft, key);
            });
        }
    }
}
