use crate::util::unicode;

/// Single-line text buffer with a cursor kept on grapheme boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Byte offset into `text`
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let text = single_line(text);
        let cursor = text.len();
        TextBuffer { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text at the cursor; line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean = single_line(s);
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Replace line breaks with spaces
pub(crate) fn single_line(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// The new-task input field. Rejects blank titles before they reach the
/// task list.
#[derive(Debug, Clone, Default)]
pub struct NewTaskInput {
    pub buffer: TextBuffer,
}

impl NewTaskInput {
    /// Take the trimmed title out of the field. Blank input yields `None`
    /// and leaves the field as it was.
    pub fn submit(&mut self) -> Option<String> {
        let title = self.buffer.text().trim();
        if title.is_empty() {
            return None;
        }
        let title = title.to_string();
        self.buffer.clear();
        Some(title)
    }
}
