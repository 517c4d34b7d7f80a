use std::fmt::Write as _;
use std::path::Path;

use push_lexer::Lexer;
use push_syntax::{SourceFile, TokenKind, render_diagnostics};

use super::{EXIT_INPUT_ERROR, print_out};

pub(crate) fn run(path: &Path) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("failed to read {}: {e}", path.display());
            return EXIT_INPUT_ERROR;
        }
    };
    let source = SourceFile::new(path.display().to_string(), text);
    let lexed = Lexer::new(source.text.as_str()).lex();

    let mut listing = String::new();
    for token in &lexed.tokens {
        if token.kind == TokenKind::Eof {
            continue;
        }
        let _ = writeln!(
            listing,
            "{:?}\t{}..{}\t{}",
            token.kind,
            token.span.start.0,
            token.span.end.0,
            source.text.slice(token.span)
        );
    }
    let code = print_out(&listing);

    if lexed.has_errors() {
        eprint!("{}", render_diagnostics(&source, &lexed.diagnostics));
        return EXIT_INPUT_ERROR;
    }
    code
}
