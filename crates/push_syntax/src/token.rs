//! Token definitions.
//!
//! Push has almost no surface syntax: parentheses group code into lists and
//! every other run of non-whitespace characters is an atom. Whether an atom
//! is a literal, an instruction or a name is decided at execution time.
use crate::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Any maximal run of characters that are neither whitespace nor parentheses.
    Atom,
    /// End of input.
    Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}
