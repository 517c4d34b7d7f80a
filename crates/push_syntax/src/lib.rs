//! Shared syntax types for the Push toolchain.
//!
//! Spans, source text with line/column lookup, tokens and diagnostics used by
//! the lexer, the parser and the command-line front end.
mod diagnostic;
mod kind;
mod render;
mod source;
mod span;
mod token;
mod util;

pub use diagnostic::{Diagnostic, Label};
pub use kind::DiagnosticKind;
pub use render::{render_diagnostic, render_diagnostics};
pub use source::{SourceFile, SourceText};
pub use span::{ByteIndex, Span};
pub use token::{Token, TokenKind};
pub use util::{find_best_match, levenshtein_distance};
