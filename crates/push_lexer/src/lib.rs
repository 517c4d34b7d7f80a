//! push_lexer: lexer crate.
//!
//! Splits Push source into parenthesis and atom tokens and reports
//! unbalanced parentheses as diagnostics.
//! Entry point: `Lexer::new(input).lex()`.
mod lexer;

pub use lexer::{LexResult, Lexer};
