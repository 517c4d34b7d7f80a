//! Parser.
//!
//! Builds a `Code` tree from lexer tokens. The whole input is one implicit
//! top-level list, so `1 2 integer.+` and `( 1 2 integer.+ )` both parse to
//! lists. Nesting is tracked with an explicit frame stack, never recursion,
//! so deeply nested input cannot exhaust the native stack here.
//!
//! The parser itself always produces a tree: a stray `)` is skipped and
//! unclosed lists are closed at end of input. Balance errors are reported by
//! the lexer, and `frontend::parse_program` refuses to return a tree when
//! any were found.
use push_core::Code;
use push_syntax::{Token, TokenKind};

/// Push parser.
pub struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    i: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(input: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            input,
            tokens,
            i: 0,
        }
    }

    /// Parse the full token stream into the top-level list.
    pub fn parse(mut self) -> Code {
        let mut frames: Vec<Vec<Code>> = vec![Vec::new()];
        while let Some(token) = self.bump() {
            match token.kind {
                TokenKind::LParen => frames.push(Vec::new()),
                TokenKind::RParen => {
                    if frames.len() > 1 {
                        close_frame(&mut frames);
                    }
                }
                TokenKind::Atom => {
                    let text = &self.input[token.span.range()];
                    if let Some(top) = frames.last_mut() {
                        top.push(Code::atom(text));
                    }
                }
                TokenKind::Eof => break,
            }
        }
        while frames.len() > 1 {
            close_frame(&mut frames);
        }
        Code::List(frames.pop().unwrap_or_default())
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.i).copied();
        self.i += 1;
        token
    }
}

fn close_frame(frames: &mut Vec<Vec<Code>>) {
    if let Some(items) = frames.pop() {
        if let Some(parent) = frames.last_mut() {
            parent.push(Code::List(items));
        }
    }
}
