/// Structured diagnostic messages produced by the lexer and parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    // Lexer
    UnmatchedDelimiter(char),
    UnclosedDelimiter(char),
}

impl DiagnosticKind {
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::UnmatchedDelimiter(c) => format!("Unmatched '{c}'"),
            DiagnosticKind::UnclosedDelimiter(c) => format!("Unclosed '{c}'"),
        }
    }
}
