use proptest::prelude::*;
use push_core::{Atom, Code, Value, classify};

fn literal(v: impl Into<Value>) -> Atom {
    Atom::Literal(v.into())
}

#[test]
fn integers_win_over_everything_else() {
    assert_eq!(classify("42"), literal(42i64));
    assert_eq!(classify("-7"), literal(-7i64));
    assert_eq!(classify("+3"), literal(3i64));
}

#[test]
fn floats_come_after_integers() {
    assert_eq!(classify("1.5"), literal(1.5f64));
    assert_eq!(classify("2e3"), literal(2000.0f64));
    assert_eq!(classify("-0.25"), literal(-0.25f64));
    // Too large for i64, still a valid float.
    assert_eq!(classify("9223372036854775808"), literal(9223372036854775808.0f64));
}

#[test]
fn booleans_are_case_insensitive() {
    assert_eq!(classify("true"), literal(true));
    assert_eq!(classify("FALSE"), literal(false));
    assert_eq!(classify("True"), literal(true));
}

#[test]
fn dotted_tokens_are_instructions_split_at_first_dot() {
    assert_eq!(
        classify("INTEGER.+"),
        Atom::Instruction {
            stack: "integer".into(),
            operation: "+".into()
        }
    );
    assert_eq!(
        classify("exec.do*range"),
        Atom::Instruction {
            stack: "exec".into(),
            operation: "do*range".into()
        }
    );
    assert_eq!(
        classify("a.b.c"),
        Atom::Instruction {
            stack: "a".into(),
            operation: "b.c".into()
        }
    );
}

#[test]
fn everything_else_is_a_lower_cased_name() {
    assert_eq!(classify("Foo"), Atom::Name("foo".into()));
    assert_eq!(classify("truthy"), Atom::Name("truthy".into()));
}

#[test]
fn points_count_atoms_and_lists() {
    let tree = Code::list(vec![
        Code::atom("1"),
        Code::list(vec![Code::atom("2"), Code::atom("3")]),
    ]);
    assert_eq!(tree.points(), 5);
    assert_eq!(Code::empty().points(), 1);
    assert_eq!(tree.to_string(), "( 1 ( 2 3 ) )");
    assert_eq!(Code::empty().to_string(), "( )");
}

#[test]
fn nth_point_walks_pre_order_and_wraps() {
    let tree = Code::list(vec![
        Code::atom("a"),
        Code::list(vec![Code::atom("b")]),
        Code::atom("c"),
    ]);
    assert_eq!(tree.nth_point(0), &tree);
    assert_eq!(tree.nth_point(1), &Code::atom("a"));
    assert_eq!(tree.nth_point(3), &Code::atom("b"));
    assert_eq!(tree.nth_point(4), &Code::atom("c"));
    assert_eq!(tree.nth_point(5), &tree);
}

#[test]
fn contains_searches_subtrees() {
    let inner = Code::list(vec![Code::atom("b")]);
    let tree = Code::list(vec![Code::atom("a"), inner.clone()]);
    assert!(tree.contains(&inner));
    assert!(tree.contains(&Code::atom("b")));
    assert!(!tree.contains(&Code::atom("z")));
}

proptest! {
    #[test]
    fn canonical_integer_text_classifies_back(i in any::<i64>()) {
        let code = Value::Integer(i).to_code();
        prop_assert_eq!(classify(code.as_atom().unwrap()), literal(i));
    }

    #[test]
    fn canonical_float_text_stays_a_float(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let code = Value::Float(f).to_code();
        prop_assert_eq!(classify(code.as_atom().unwrap()), literal(f));
    }
}
