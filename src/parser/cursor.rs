//! Cheap-to-clone cursor over the input characters, used both for the main
//! parse and for the bounded lookahead that disambiguates `key {` from
//! `key = {` (see [`super::driver::ParserDriver::classify_as_object`]).

use std::rc::Rc;

use crate::error::{Error, ParseError};

/// Current position, tracked so error messages can point at it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Snapshot {
    pub line: usize,
    pub col: usize,
}

/// Backed by an `Rc<Vec<char>>` so that cloning a cursor for tentative
/// lookahead is O(1) rather than copying the whole document.
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    chars: Rc<Vec<char>>,
    lines: Rc<Vec<String>>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            chars: Rc::new(source.chars().collect()),
            lines: Rc::new(split_lines(source)),
            pos: 0,
            line: 1,
            col: 0,
        }
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            line: self.line,
            col: self.col,
        }
    }

    pub fn line_text(&self, line_number: usize) -> String {
        self.lines.get(line_number - 1).cloned().unwrap_or_default()
    }
}

fn split_lines(source: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for c in source.chars() {
        current.push(c);
        if c == '\n' {
            lines.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Build a `ParsingError` positioned at the cursor's current location.
pub(crate) fn syntax_error(cur: &Cursor, message: impl Into<String>) -> Error {
    let snap = cur.snapshot();
    let line_text = cur.line_text(snap.line);
    Error::Parsing(ParseError::syntax(message, snap.line, snap.col, line_text))
}

/// Build a `ParsingErrorWrongType` positioned at the cursor's current
/// location: a follow-up-character expectation mismatch (§4.5's string
/// state machine), distinct from a plain structural syntax error.
pub(crate) fn wrong_type_error(cur: &Cursor, message: impl Into<String>) -> Error {
    let snap = cur.snapshot();
    let line_text = cur.line_text(snap.line);
    Error::Parsing(ParseError::wrong_type(message, snap.line, snap.col, line_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cur = Cursor::new("ab\ncd");
        assert_eq!(cur.advance(), Some('a'));
        assert_eq!(cur.advance(), Some('b'));
        let before_newline = cur.snapshot();
        assert_eq!((before_newline.line, before_newline.col), (1, 2));
        assert_eq!(cur.advance(), Some('\n'));
        let after_newline = cur.snapshot();
        assert_eq!((after_newline.line, after_newline.col), (2, 0));
    }

    #[test]
    fn clone_is_independent_of_original() {
        let mut cur = Cursor::new("abc");
        let mut probe = cur.clone();
        probe.advance();
        probe.advance();
        assert_eq!(cur.peek(0), Some('a'));
        assert_eq!(probe.peek(0), Some('c'));
    }
}
