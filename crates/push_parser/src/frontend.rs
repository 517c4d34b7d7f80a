use std::fs;
use std::path::Path;

use push_core::Code;
use push_lexer::Lexer;
use push_syntax::{Diagnostic, SourceFile, Token};

use crate::{ParseError, Parser};

/// A lexed and parsed program together with everything found along the way.
#[derive(Clone, Debug)]
pub struct ParsedProgram {
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub code: Code,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedProgram {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The program tree, or a `ParseError` if any error diagnostic was
    /// reported. A partial tree is never returned.
    pub fn into_code(self) -> Result<Code, ParseError> {
        if self.has_errors() {
            return Err(ParseError::syntax(self.source, self.diagnostics));
        }
        Ok(self.code)
    }
}

pub fn parse_program(name: &str, text: &str) -> ParsedProgram {
    let source = SourceFile::new(name, text);
    let lex = Lexer::new(source.text.as_str()).lex();
    let code = Parser::new(source.text.as_str(), &lex.tokens).parse();
    ParsedProgram {
        source,
        tokens: lex.tokens,
        code,
        diagnostics: lex.diagnostics,
    }
}

/// Parse inline program text.
pub fn parse(text: &str) -> Result<Code, ParseError> {
    parse_program("<input>", text).into_code()
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedProgram, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_program(&path.display().to_string(), &text))
}
