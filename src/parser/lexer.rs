//! Lexeme reading: quoted and unquoted scalars, doubled-character escapes,
//! line comments and nested block comments.

use super::cursor::{syntax_error, wrong_type_error, Cursor};
use crate::error::Error;

/// The six characters that escape themselves by doubling ("escape
/// tracking").
const ESCAPABLE: [char; 6] = ['{', '=', '}', '"', '\'', '\\'];

fn is_escapable(c: char) -> bool {
    ESCAPABLE.contains(&c)
}

/// A key or value lexeme plus the character that ended it (consumed from
/// the cursor already).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lexeme {
    pub raw: String,
    pub quoted: bool,
    pub terminator: char,
}

pub(crate) fn skip_inline_ws(cur: &mut Cursor) {
    while matches!(cur.peek(0), Some(' ') | Some('\t')) {
        cur.advance();
    }
}

/// Skip whitespace, newlines, and comments, leaving the cursor on the next
/// substantive character (or at EOF).
pub(crate) fn skip_ws_newlines_comments(cur: &mut Cursor) -> Result<(), Error> {
    loop {
        match cur.peek(0) {
            Some(' ') | Some('\t') | Some('\n') => {
                cur.advance();
            }
            Some('#') => skip_comment(cur)?,
            _ => break,
        }
    }
    Ok(())
}

/// Assumes the cursor is positioned on the leading `#`. Handles both the
/// line form (`# ... \n`) and the nested block form (`#{ ... }`).
fn skip_comment(cur: &mut Cursor) -> Result<(), Error> {
    cur.advance(); // '#'
    if cur.peek(0) == Some('{') {
        cur.advance();
        let mut depth = 1usize;
        loop {
            match cur.advance() {
                None => return Err(syntax_error(cur, "unterminated nested comment")),
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
        }
    } else {
        while let Some(c) = cur.peek(0) {
            if c == '\n' {
                cur.advance();
                break;
            }
            cur.advance();
        }
    }
    Ok(())
}

/// Read a key or value lexeme, dispatching to the quoted or unquoted form
/// based on the leading character.
pub(crate) fn read_lexeme(cur: &mut Cursor, stop_chars: &[char]) -> Result<Lexeme, Error> {
    match cur.peek(0) {
        Some('"') => {
            cur.advance();
            read_quoted(cur, '"', stop_chars)
        }
        Some('\'') => {
            cur.advance();
            read_quoted(cur, '\'', stop_chars)
        }
        _ => read_unquoted(cur, stop_chars),
    }
}

fn read_unquoted(cur: &mut Cursor, stop_chars: &[char]) -> Result<Lexeme, Error> {
    let mut raw = String::new();
    let terminator = loop {
        let Some(c) = cur.peek(0) else {
            // EOF flushes the pending lexeme as though a newline were seen.
            break '\n';
        };
        if stop_chars.contains(&c) {
            cur.advance();
            break c;
        }
        if c == '\\' && cur.peek(1) == Some('\n') {
            cur.advance();
            cur.advance();
            skip_inline_ws(cur);
            continue;
        }
        if is_escapable(c) && cur.peek(1) == Some(c) {
            raw.push(c);
            cur.advance();
            cur.advance();
            continue;
        }
        raw.push(c);
        cur.advance();
    };
    let trimmed = raw.trim_end_matches([' ', '\t']);
    Ok(Lexeme {
        raw: trimmed.to_string(),
        quoted: false,
        terminator,
    })
}

fn read_quoted(cur: &mut Cursor, quote: char, stop_chars: &[char]) -> Result<Lexeme, Error> {
    let mut raw = String::new();
    loop {
        match cur.advance() {
            None => {
                return Err(syntax_error(
                    cur,
                    format!("unterminated string starting with {quote:?}"),
                ))
            }
            Some(c) if c == quote => {
                if cur.peek(0) == Some(quote) {
                    raw.push(quote);
                    cur.advance();
                } else {
                    break;
                }
            }
            Some('\\') if cur.peek(0) == Some('\n') => {
                cur.advance();
                skip_inline_ws(cur);
            }
            Some(c) => raw.push(c),
        }
    }
    skip_inline_ws(cur);
    let terminator = match cur.peek(0) {
        None => '\n',
        Some(c) if stop_chars.contains(&c) => {
            cur.advance();
            c
        }
        Some(other) => {
            return Err(wrong_type_error(
                cur,
                format!("expected one of {stop_chars:?} after quoted string, found {other:?}"),
            ))
        }
    };
    Ok(Lexeme {
        raw,
        quoted: true,
        terminator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_value_trims_trailing_whitespace() {
        let mut cur = Cursor::new("5   \nrest");
        let lex = read_lexeme(&mut cur, &['\n', '{']).unwrap();
        assert_eq!(lex.raw, "5");
        assert_eq!(lex.terminator, '\n');
        assert!(!lex.quoted);
    }

    #[test]
    fn quoted_value_unescapes_doubled_quotes() {
        let mut cur = Cursor::new("\"val\"\"ue\"\n");
        let lex = read_lexeme(&mut cur, &['\n', '{']).unwrap();
        assert_eq!(lex.raw, "val\"ue");
        assert!(lex.quoted);
    }

    #[test]
    fn unquoted_key_stops_at_equals() {
        let mut cur = Cursor::new("name=\"cat\"");
        let lex = read_lexeme(&mut cur, &['=', '{']).unwrap();
        assert_eq!(lex.raw, "name");
        assert_eq!(lex.terminator, '=');
    }

    #[test]
    fn key_stops_at_opening_brace() {
        let mut cur = Cursor::new("nested{}\n");
        let lex = read_lexeme(&mut cur, &['=', '{']).unwrap();
        assert_eq!(lex.raw, "nested");
        assert_eq!(lex.terminator, '{');
    }

    #[test]
    fn eof_flushes_pending_unquoted_lexeme() {
        let mut cur = Cursor::new("smol");
        let lex = read_lexeme(&mut cur, &['\n', '{']).unwrap();
        assert_eq!(lex.raw, "smol");
        assert_eq!(lex.terminator, '\n');
    }

    #[test]
    fn unterminated_quoted_string_is_an_error() {
        let mut cur = Cursor::new("\"never closes");
        assert!(read_lexeme(&mut cur, &['\n', '{']).is_err());
    }

    #[test]
    fn unquoted_line_continuation_skips_next_lines_leading_whitespace() {
        let mut cur = Cursor::new("line \\\n    two\n");
        let lex = read_lexeme(&mut cur, &['\n', '{']).unwrap();
        assert_eq!(lex.raw, "line two");
        assert!(!lex.quoted);
    }

    #[test]
    fn quoted_line_continuation_skips_next_lines_leading_whitespace() {
        let mut cur = Cursor::new("\"line one \\\n    line two\"\n");
        let lex = read_lexeme(&mut cur, &['\n', '{']).unwrap();
        assert_eq!(lex.raw, "line one line two");
        assert!(lex.quoted);
    }

    #[test]
    fn garbage_after_quoted_string_is_a_wrong_type_parse_error() {
        let mut cur = Cursor::new("\"val\"garbage\n");
        let err = read_lexeme(&mut cur, &['\n', '{']).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::ParsingWrongType);
    }

    #[test]
    fn nested_block_comment_is_skipped() {
        let mut cur = Cursor::new("#{ outer #{ inner } still outer }rest");
        skip_ws_newlines_comments(&mut cur).unwrap();
        let mut rest = String::new();
        while let Some(c) = cur.advance() {
            rest.push(c);
        }
        assert_eq!(rest, "rest");
    }

    #[test]
    fn unclosed_nested_comment_is_an_error() {
        let mut cur = Cursor::new("#{ outer #{ inner }");
        assert!(skip_ws_newlines_comments(&mut cur).is_err());
    }
}
