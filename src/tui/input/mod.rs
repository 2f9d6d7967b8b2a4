mod add;
mod edit;
mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use add::handle_add_input;
use edit::handle_row_edit;
use navigate::handle_navigate;

/// Handle a key event for the current focus and row mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    match app.focus {
        Focus::Input => handle_add_input(app, key),
        Focus::List if app.cursor_row_editing() => handle_row_edit(app, key),
        Focus::List => handle_navigate(app, key),
    }
}

/// Handle a bracketed paste. Goes to whichever text field has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.focus {
        Focus::Input => app.input.buffer.insert_str(text),
        Focus::List => {
            app.edit_draft_at_cursor(|draft| draft.insert_str(text));
        }
    }
}
