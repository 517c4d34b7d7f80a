use std::io::Write;

use push_parser::{Code, ParseError, parse, parse_file, parse_program};

fn atom(s: &str) -> Code {
    Code::atom(s)
}

#[test]
fn top_level_is_an_implicit_list() {
    let code = parse("1 2 integer.+").unwrap();
    assert_eq!(
        code,
        Code::list(vec![atom("1"), atom("2"), atom("integer.+")])
    );
}

#[test]
fn nested_lists_keep_their_order() {
    let code = parse("( 1 ( 2 3 ) ( ) )").unwrap();
    assert_eq!(
        code,
        Code::list(vec![Code::list(vec![
            atom("1"),
            Code::list(vec![atom("2"), atom("3")]),
            Code::empty(),
        ])])
    );
    assert_eq!(code.to_string(), "( ( 1 ( 2 3 ) ( ) ) )");
}

#[test]
fn atoms_keep_their_original_case() {
    let code = parse("FOO Integer.DUP").unwrap();
    assert_eq!(code, Code::list(vec![atom("FOO"), atom("Integer.DUP")]));
}

#[test]
fn empty_text_parses_to_empty_list() {
    assert_eq!(parse("").unwrap(), Code::empty());
    assert_eq!(parse("  \n ").unwrap(), Code::empty());
}

#[test]
fn unclosed_paren_names_its_location() {
    let err = parse("1\n  ( 2 3").unwrap_err();
    match &err {
        ParseError::Syntax {
            line,
            column,
            message,
            ..
        } => {
            assert_eq!((*line, *column), (2, 3));
            assert_eq!(message, "Unclosed '('");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(err.to_string(), "<input>:2:3: Unclosed '('");
    assert!(err.render().contains("  |   ( 2 3"), "{}", err.render());
}

#[test]
fn stray_close_paren_is_rejected() {
    let err = parse("( 1 ) )").unwrap_err();
    assert_eq!(err.to_string(), "<input>:1:7: Unmatched ')'");
    assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn parsed_program_keeps_a_recovered_tree_for_tooling() {
    let parsed = parse_program("broken.push", "( 1 2");
    assert!(parsed.has_errors());
    assert_eq!(
        parsed.code,
        Code::list(vec![Code::list(vec![atom("1"), atom("2")])])
    );
    assert!(parsed.into_code().is_err());
}

#[test]
fn parse_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "( 5 integer.dup )").unwrap();
    let parsed = parse_file(file.path()).unwrap();
    assert!(!parsed.has_errors());
    assert_eq!(parsed.code.points(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file("/definitely/not/here.push").unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}

#[test]
fn deep_nesting_does_not_recurse() {
    let depth = 5_000;
    let src = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let code = parse(&src).unwrap();
    assert_eq!(code.points(), depth + 1);
    // Tear down without recursing through Drop either.
    let mut pending = vec![code];
    while let Some(c) = pending.pop() {
        if let Code::List(items) = c {
            pending.extend(items);
        }
    }
}
