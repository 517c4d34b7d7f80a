//! push_parser: source text to program trees.
//!
//! `Parser` turns a token stream into a `Code` tree; `parse`, `parse_program`
//! and `parse_file` run the lexer and parser together and turn any
//! diagnostics into a `ParseError`.
mod error;
mod frontend;
mod parser;

pub use error::ParseError;
pub use frontend::{ParsedProgram, parse, parse_file, parse_program};
pub use parser::Parser;
pub use push_core::Code;
