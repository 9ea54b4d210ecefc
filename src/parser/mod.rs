//! Recursive-descent parser for Luco text.
//!
//! The object-vs-array decision on a freshly opened `{` is resolved with a
//! cloned, `Rc`-backed [`cursor::Cursor`] lookahead rather than a pushed
//! frame on an explicit context stack — see `DESIGN.md` for the tradeoff.

mod cursor;
mod lexer;
pub(crate) mod driver;
