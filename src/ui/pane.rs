//! Pane model: a named rectangle with a line buffer

use ratatui::{layout::Rect, style::Color};

/// Editing state of an editable pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Empty,
    Editing,
}

/// A named region of the terminal with its own text buffer
#[derive(Debug, Clone)]
pub struct Pane {
    name: String,
    pub title: String,
    pub color: Color,
    pub editable: bool,
    /// Height used by the grid policy; set by the caller before layout
    pub height: Option<u16>,
    rect: Rect,
    lines: Vec<String>,
    /// (row, column) in characters
    cursor: (usize, usize),
}

impl Pane {
    pub fn new(name: impl Into<String>, title: impl Into<String>, color: Color, editable: bool) -> Self {
        Pane {
            name: name.into(),
            title: title.into(),
            color,
            editable,
            height: None,
            rect: Rect::default(),
            lines: Vec::new(),
            cursor: (0, 0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn edit_state(&self) -> EditState {
        if self.lines.iter().all(|line| line.is_empty()) {
            EditState::Empty
        } else {
            EditState::Editing
        }
    }

    /// Append whole lines to the end of the buffer
    pub fn push_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.break_line();
            return;
        }
        let (row, col) = self.cursor;
        let line = self.line_mut(row);
        let at = byte_offset(line, col);
        line.insert(at, c);
        self.cursor.1 += 1;
    }

    /// Insert text at the cursor; line breaks start new lines
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            let line = self.line_mut(row);
            let at = byte_offset(line, col - 1);
            line.remove(at);
            self.cursor.1 -= 1;
        } else if row > 0 && row < self.lines.len() {
            let tail = self.lines.remove(row);
            let prev = &mut self.lines[row - 1];
            let prev_len = prev.chars().count();
            prev.push_str(&tail);
            self.cursor = (row - 1, prev_len);
        }
    }

    /// Take the whole buffer as one string, leaving it empty with the
    /// cursor at the origin
    pub fn take_text(&mut self) -> String {
        let text = self.lines.join("\n");
        self.clear();
        text
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = (0, 0);
    }

    fn break_line(&mut self) {
        let (row, col) = self.cursor;
        let line = self.line_mut(row);
        let at = byte_offset(line, col);
        let tail = line.split_off(at);
        self.lines.insert(row + 1, tail);
        self.cursor = (row + 1, 0);
    }

    fn line_mut(&mut self, row: usize) -> &mut String {
        while self.lines.len() <= row {
            self.lines.push(String::new());
        }
        &mut self.lines[row]
    }
}

/// Split committed text into display lines. A trailing line break does not
/// produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
    if lines.last().is_some_and(|s| s.is_empty()) {
        lines.pop();
    }
    lines
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
