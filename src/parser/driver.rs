//! Recursive-descent driver that turns a character stream into a [`Node`]
//! tree. See `DESIGN.md` for why this replaces a context-stack tokeniser
//! with plain recursive descent over a shared cursor.

use super::cursor::{syntax_error, Cursor};
use super::lexer::{read_lexeme, skip_inline_ws, skip_ws_newlines_comments, Lexeme};
use crate::array::Array;
use crate::error::Error;
use crate::node::Node;
use crate::object::Object;
use crate::scalar::Scalar;
use crate::type_inference;

pub(crate) struct ParserDriver {
    cur: Cursor,
}

impl ParserDriver {
    pub fn new(source: &str) -> Self {
        ParserDriver {
            cur: Cursor::new(source),
        }
    }

    /// Parse the whole document. The root is always an Object: a bare `{`
    /// in key position, including at the very start of the document, is
    /// rejected rather than opening a root array — see `DESIGN.md`, Open
    /// Question O5.
    pub fn parse(mut self) -> Result<Node, Error> {
        let entries = self.parse_members(true)?;
        Ok(Node::Object(entries.into_iter().collect::<Object>()))
    }

    fn parse_members(&mut self, top_level: bool) -> Result<Vec<(String, Node)>, Error> {
        let mut entries: Vec<(String, Node)> = Vec::new();
        loop {
            skip_ws_newlines_comments(&mut self.cur)?;
            if self.cur.is_eof() {
                if top_level {
                    break;
                }
                return Err(self.syntax_error("unexpected end of input, expected '}'"));
            }
            if self.cur.peek(0) == Some('}') {
                if top_level {
                    return Err(self.syntax_error("unexpected '}'"));
                }
                self.cur.advance();
                break;
            }
            let (key, value) = self.parse_member()?;
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(entries)
    }

    fn parse_member(&mut self) -> Result<(String, Node), Error> {
        let key_lex = read_lexeme(&mut self.cur, &['=', '{'])?;
        if !key_lex.quoted && key_lex.raw.is_empty() && key_lex.terminator == '{' {
            return Err(self.syntax_error("expected key, found '{'"));
        }
        let key = key_lex.raw;
        match key_lex.terminator {
            '=' => {
                skip_inline_ws(&mut self.cur);
                if self.cur.peek(0) == Some('{') {
                    self.cur.advance();
                    let value = self.parse_bracket_contents()?;
                    Ok((key, value))
                } else {
                    let value_lex = read_lexeme(&mut self.cur, &['\n', '{'])?;
                    if value_lex.terminator == '{' {
                        return Err(
                            self.syntax_error("expected newline after value, found '{'")
                        );
                    }
                    Ok((key, Node::Scalar(self.scalar_from_lexeme(&value_lex))))
                }
            }
            '{' => {
                let value = self.parse_bracket_contents()?;
                Ok((key, value))
            }
            _ => unreachable!("read_lexeme only terminates on a requested stop char"),
        }
    }

    /// Assumes the opening `{` has already been consumed.
    fn parse_bracket_contents(&mut self) -> Result<Node, Error> {
        if self.classify_as_object() {
            let entries = self.parse_members(false)?;
            Ok(Node::Object(entries.into_iter().collect::<Object>()))
        } else {
            let items = self.parse_array_elems()?;
            Ok(Node::Array(items.into_iter().collect::<Array>()))
        }
    }

    fn parse_array_elems(&mut self) -> Result<Vec<Node>, Error> {
        let mut items = Vec::new();
        loop {
            skip_ws_newlines_comments(&mut self.cur)?;
            if self.cur.is_eof() {
                return Err(self.syntax_error("unexpected end of input, expected '}'"));
            }
            if self.cur.peek(0) == Some('}') {
                self.cur.advance();
                break;
            }
            let lex = read_lexeme(&mut self.cur, &['\n', '{'])?;
            if lex.terminator == '{' {
                if lex.quoted || !lex.raw.is_empty() {
                    items.push(Node::Scalar(self.scalar_from_lexeme(&lex)));
                }
                items.push(self.parse_bracket_contents()?);
            } else {
                items.push(Node::Scalar(self.scalar_from_lexeme(&lex)));
            }
        }
        Ok(items)
    }

    /// Bounded lookahead on a cloned cursor (cheap: `Cursor` is `Rc`-backed)
    /// to decide whether the bracket just opened starts an Object or an
    /// Array, without committing to either.
    fn classify_as_object(&self) -> bool {
        let mut probe = self.cur.clone();
        loop {
            match probe.peek(0) {
                None | Some('}') | Some('{') => return false,
                Some(' ') | Some('\t') | Some('\n') => {
                    probe.advance();
                }
                Some('#') => {
                    if super::lexer::skip_ws_newlines_comments(&mut probe).is_err() {
                        return false;
                    }
                }
                _ => break,
            }
        }
        match read_lexeme(&mut probe, &['=', '{', '\n']) {
            Ok(lex) => lex.terminator == '=' || lex.terminator == '{',
            Err(_) => false,
        }
    }

    fn scalar_from_lexeme(&self, lex: &Lexeme) -> Scalar {
        if lex.quoted {
            Scalar::String(lex.raw.clone())
        } else {
            type_inference::infer(&lex.raw)
        }
    }

    fn syntax_error(&self, message: impl Into<String>) -> Error {
        syntax_error(&self.cur, message)
    }
}
