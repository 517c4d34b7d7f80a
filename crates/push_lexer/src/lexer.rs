//! Lexer implementation.
//!
//! Single linear pass over the input. Whitespace separates atoms, `(` and `)`
//! are always tokens of their own, and a delimiter stack tracks balance so
//! that every stray `)` and every unclosed `(` gets its own diagnostic.
use push_syntax::{Diagnostic, DiagnosticKind, Span, Token, TokenKind};

/// Lexing result.
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Push lexer.
pub struct Lexer<'a> {
    input: &'a str,
    i: usize,
    diagnostics: Vec<Diagnostic>,
    tokens: Vec<Token>,
    open_parens: Vec<usize>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            i: 0,
            diagnostics: Vec::new(),
            tokens: Vec::new(),
            open_parens: Vec::new(),
        }
    }

    /// Run the lexer and return tokens + diagnostics. The token list always
    /// ends with `Eof`.
    pub fn lex(mut self) -> LexResult {
        self.tokens.reserve(self.input.len().saturating_div(3).max(8));
        while let Some(c) = self.peek_char() {
            let start = self.i;
            match c {
                '(' => {
                    self.i += 1;
                    self.open_parens.push(start);
                    self.push(TokenKind::LParen, start);
                }
                ')' => {
                    self.i += 1;
                    if self.open_parens.pop().is_none() {
                        self.diagnostics.push(Diagnostic::error(
                            DiagnosticKind::UnmatchedDelimiter(')'),
                            Some(Span::at(start, 1)),
                        ));
                    }
                    self.push(TokenKind::RParen, start);
                }
                c if c.is_whitespace() => {
                    self.i += c.len_utf8();
                }
                _ => self.lex_atom(),
            }
        }
        let end = self.input.len();
        for start in std::mem::take(&mut self.open_parens) {
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::UnclosedDelimiter('('),
                    Some(Span::at(start, 1)),
                )
                .with_label("input ends here", Span::at(end, 0))
                .with_help("add a matching ')'"),
            );
        }
        self.push(TokenKind::Eof, end);
        LexResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn lex_atom(&mut self) {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '(' || c == ')' || c.is_whitespace() {
                break;
            }
            self.i += c.len_utf8();
        }
        self.push(TokenKind::Atom, start);
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.i..].chars().next()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span::new(start as u32, self.i as u32),
        });
    }
}
