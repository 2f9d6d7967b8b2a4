use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset where the visible window of `s` must start so that the
/// cursor at `cursor` (byte offset) fits in `max_cells` cells, cursor cell
/// included.
pub fn scroll_start_for_cursor(s: &str, cursor: usize, max_cells: usize) -> usize {
    let cursor = cursor.min(s.len());
    if max_cells == 0 {
        return cursor;
    }
    // One cell is reserved for the cursor block itself.
    let budget = max_cells - 1;
    let mut start = cursor;
    let mut used = 0;
    for (i, g) in s[..cursor].grapheme_indices(true).rev() {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        start = i;
    }
    start
}

/// Next grapheme boundary after `byte_offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let step = s[byte_offset..]
        .graphemes(true)
        .next()
        .map_or(s.len() - byte_offset, str::len);
    Some(byte_offset + step)
}

/// Previous grapheme boundary before `byte_offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word left of `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);

    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(byte_offset, |(i, _)| *i)
}
