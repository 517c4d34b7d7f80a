use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use push_parser::{Code, parse, parse_program};

fn any_push_like() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "(", ")", " ", "\n", "7", "-1.5", "false", "integer.*", "code.quote", "x",
    ]);
    proptest::collection::vec(pieces, 0..80).prop_map(|v| v.concat())
}

fn atoms(code: &Code, out: &mut Vec<String>) {
    match code {
        Code::Atom(s) => out.push(s.clone()),
        Code::List(items) => items.iter().for_each(|c| atoms(c, out)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, max_shrink_iters: 200, .. ProptestConfig::default()
    })]
    #[test]
    fn parser_never_panics_and_keeps_every_atom(s in any_push_like()) {
        let parsed = parse_program("fuzz", &s);
        let mut found = Vec::new();
        atoms(&parsed.code, &mut found);
        let expected: Vec<String> = s
            .replace(['(', ')'], " ")
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn printed_trees_parse_back_to_themselves(s in any_push_like()) {
        if let Ok(code) = parse(&s) {
            let printed = code.to_string();
            // The printed form is itself a single list, so it gains one wrapper.
            let reparsed = parse(&printed).unwrap();
            prop_assert_eq!(reparsed, Code::list(vec![code]));
        }
    }
}
