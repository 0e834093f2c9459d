//! Text utilities for the board.

use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` terminal columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Keeps the end of `text` within `max_width` columns, eliding the start.
///
/// Used for inputs being typed into, where the cursor sits at the end.
pub fn tail_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut tail = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        tail.push(ch);
    }
    let mut out = String::from("…");
    out.extend(tail.into_iter().rev());
    out
}

/// Word-wraps `text` to `width` terminal columns.
///
/// Explicit newlines start a new row. Words wider than `width` are broken
/// between characters. Always returns at least one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for paragraph in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!row.is_empty());
            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }
            if !row.is_empty() {
                rows.push(mem::take(&mut row));
                row_width = 0;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width + ch_width > width && !row.is_empty() {
                    rows.push(mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Applies a single-line editing key to `buffer`. Other keys are ignored.
pub fn edit_text(buffer: &mut String, key: &KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char('u') if ctrl => buffer.clear(),
        KeyCode::Char(c) if !ctrl => buffer.push(c),
        _ => {}
    }
}

/// Renders a secret as one bullet per character.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
