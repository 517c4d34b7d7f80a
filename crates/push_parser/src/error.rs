use push_syntax::{Diagnostic, SourceFile, render_diagnostics};
use thiserror::Error;

/// Failure to turn source text into a program tree. Raised before any
/// execution begins.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Unbalanced parentheses. `line`/`column` (1-based) locate the first
    /// problem; `diagnostics` holds every problem found.
    #[error("{file}:{line}:{column}: {message}")]
    Syntax {
        file: String,
        line: u32,
        column: u32,
        message: String,
        source_file: SourceFile,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl ParseError {
    pub(crate) fn syntax(source_file: SourceFile, diagnostics: Vec<Diagnostic>) -> Self {
        let first = &diagnostics[0];
        let (line, column) = first
            .span
            .map(|s| source_file.text.line_col(s.start.0))
            .unwrap_or((0, 0));
        ParseError::Syntax {
            file: source_file.name.clone(),
            line: line + 1,
            column: column + 1,
            message: first.message.clone(),
            source_file,
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseError::Syntax { diagnostics, .. } => diagnostics,
            ParseError::Io { .. } => &[],
        }
    }

    /// Every diagnostic rendered with a source excerpt.
    pub fn render(&self) -> String {
        match self {
            ParseError::Syntax {
                source_file,
                diagnostics,
                ..
            } => render_diagnostics(source_file, diagnostics),
            ParseError::Io { .. } => self.to_string(),
        }
    }
}
