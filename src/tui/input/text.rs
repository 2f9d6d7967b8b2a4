use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::text_input::TextBuffer;

/// Apply a line-editing key to `buf`. Returns false when the key is not an
/// editing key, so the caller can handle it.
pub(super) fn apply_text_key(buf: &mut TextBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('a') if ctrl => buf.home(),
        KeyCode::Char('e') if ctrl => buf.end(),
        KeyCode::Char('w') if ctrl => buf.delete_word_back(),
        KeyCode::Char('u') if ctrl => buf.clear(),
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(c) => buf.insert_char(c),
        KeyCode::Backspace if alt || ctrl => buf.delete_word_back(),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.home(),
        KeyCode::End => buf.end(),
        _ => return false,
    }
    true
}
