use push_parser::parse;
use push_runtime::{Code, Interpreter, Options};

/// Run with the program kept off the code stack so that code tests see
/// only what they build.
fn run(src: &str) -> Interpreter {
    let mut builder = Options::builder();
    builder.top_level_push_code = false;
    let mut it = Interpreter::new(builder.build().unwrap());
    it.run(src).unwrap();
    it
}

fn ints(src: &str) -> Vec<i64> {
    run(src).stacks().integer.as_slice().to_vec()
}

fn floats(src: &str) -> Vec<f64> {
    run(src).stacks().float.as_slice().to_vec()
}

fn bools(src: &str) -> Vec<bool> {
    run(src).stacks().boolean.as_slice().to_vec()
}

fn names(src: &str) -> Vec<String> {
    run(src).stacks().name.as_slice().to_vec()
}

/// Code stack bottom-up, each item printed.
fn code(src: &str) -> Vec<String> {
    run(src)
        .stacks()
        .code
        .as_slice()
        .iter()
        .map(Code::to_string)
        .collect()
}

fn tree(src: &str) -> Code {
    parse(src).unwrap().into_list().remove(0)
}

mod integer {
    use super::*;

    #[test]
    fn arithmetic_uses_second_and_top() {
        assert_eq!(ints("3 4 integer.+"), [7]);
        assert_eq!(ints("3 4 integer.-"), [-1]);
        assert_eq!(ints("3 4 integer.*"), [12]);
        assert_eq!(ints("7 2 integer./"), [3]);
        assert_eq!(ints("-7 2 integer./"), [-3]);
        assert_eq!(ints("3 9 integer.max 3 integer.min"), [3]);
    }

    #[test]
    fn zero_divisor_is_a_noop() {
        assert_eq!(ints("3 0 integer./"), [3, 0]);
        assert_eq!(ints("3 0 integer.%"), [3, 0]);
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor() {
        assert_eq!(ints("7 3 integer.%"), [1]);
        assert_eq!(ints("-7 3 integer.%"), [2]);
        assert_eq!(ints("7 -3 integer.%"), [-2]);
        assert_eq!(ints("-6 3 integer.%"), [0]);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(ints("9223372036854775807 1 integer.+"), [i64::MIN]);
        assert_eq!(ints("-9223372036854775808 -1 integer./"), [i64::MIN]);
    }

    #[test]
    fn too_few_arguments_is_a_noop() {
        assert_eq!(ints("5 integer.+"), [5]);
        assert_eq!(ints("integer.dup"), [] as [i64; 0]);
        assert_eq!(ints("1 integer.swap"), [1]);
        assert_eq!(ints("1 2 integer.rot"), [1, 2]);
    }

    #[test]
    fn stack_manipulation() {
        assert_eq!(ints("5 integer.dup"), [5, 5]);
        assert_eq!(ints("1 2 integer.swap"), [2, 1]);
        assert_eq!(ints("1 2 3 integer.rot"), [2, 3, 1]);
        assert_eq!(ints("1 2 integer.pop"), [1]);
        assert_eq!(ints("1 2 integer.flush 3"), [3]);
        assert_eq!(ints("4 5 integer.stackdepth"), [4, 5, 2]);
    }

    #[test]
    fn comparisons_push_booleans() {
        let it = run("1 2 integer.< 1 2 integer.> 4 4 integer.=");
        assert!(it.stacks().integer.is_empty());
        assert_eq!(it.stacks().boolean.as_slice(), &[true, false, true]);
    }

    #[test]
    fn conversions() {
        assert_eq!(ints("true integer.fromboolean false integer.fromboolean"), [1, 0]);
        assert_eq!(ints("2.9 integer.fromfloat -2.9 integer.fromfloat"), [2, -2]);
        assert_eq!(ints("integer.fromfloat"), [] as [i64; 0]);
    }

    #[test]
    fn yank_and_yankdup_index_from_the_top() {
        assert_eq!(ints("10 20 30 40 2 integer.yank"), [10, 30, 40, 20]);
        assert_eq!(ints("10 20 30 0 integer.yankdup"), [10, 20, 30, 30]);
        assert_eq!(ints("10 20 30 99 integer.yankdup"), [10, 20, 30, 10]);
        assert_eq!(ints("10 20 30 -5 integer.yank"), [10, 20, 30]);
    }

    #[test]
    fn shove_buries_the_item_under_the_index() {
        assert_eq!(ints("10 20 30 99 1 integer.shove"), [10, 20, 99, 30]);
        assert_eq!(ints("10 20 99 50 integer.shove"), [99, 10, 20]);
        assert_eq!(ints("5 integer.shove"), [5]);
    }

    #[test]
    fn index_from_integer_for_other_stacks() {
        assert_eq!(floats("1.5 2.5 3.5 2 float.yank"), [2.5, 3.5, 1.5]);
        assert_eq!(floats("1.5 2.5 1 float.shove"), [2.5, 1.5]);
        // Index without a target item.
        let it = run("1 float.yank");
        assert_eq!(it.stacks().integer.as_slice(), &[1]);
    }
}

mod float {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(floats("1.5 2.0 float.+"), [3.5]);
        assert_eq!(floats("1.5 2.0 float.-"), [-0.5]);
        assert_eq!(floats("1.5 2.0 float.*"), [3.0]);
        assert_eq!(floats("1.0 4.0 float./"), [0.25]);
        assert_eq!(floats("-7.0 3.0 float.%"), [2.0]);
        assert_eq!(floats("1.0 2.0 float.max"), [2.0]);
    }

    #[test]
    fn zero_divisor_is_a_noop() {
        assert_eq!(floats("1.0 0.0 float./"), [1.0, 0.0]);
        assert_eq!(floats("1.0 0.0 float.%"), [1.0, 0.0]);
    }

    #[test]
    fn trigonometry_and_conversions() {
        assert_eq!(floats("0.0 float.cos 0.0 float.sin"), [1.0, 0.0]);
        assert_eq!(floats("3 float.frominteger true float.fromboolean"), [3.0, 1.0]);
    }

    #[test]
    fn stackdepth_goes_to_the_integer_stack() {
        let it = run("1.5 2.5 float.stackdepth");
        assert_eq!(it.stacks().integer.as_slice(), &[2]);
        assert_eq!(it.stacks().float.len(), 2);
    }

    #[test]
    fn comparisons() {
        assert_eq!(bools("1.0 2.0 float.< 1.0 1.0 float.="), [true, true]);
    }
}

mod boolean {
    use super::*;

    #[test]
    fn logic() {
        assert_eq!(bools("true false boolean.and"), [false]);
        assert_eq!(bools("true false boolean.or"), [true]);
        assert_eq!(bools("true boolean.not"), [false]);
        assert_eq!(bools("true boolean.and"), [true]);
    }

    #[test]
    fn conversions_test_for_non_zero() {
        assert_eq!(
            bools("0 boolean.frominteger 2.5 boolean.fromfloat 0.0 boolean.fromfloat"),
            [false, true, false]
        );
    }
}

mod name {
    use super::*;

    #[test]
    fn stack_manipulation() {
        assert_eq!(names("a b name.swap"), ["b", "a"]);
        assert_eq!(names("a name.dup"), ["a", "a"]);
        assert_eq!(bools("a a name.="), [true]);
        assert_eq!(ints("a b name.stackdepth"), [2]);
    }

    #[test]
    fn rand_reuses_minted_names_when_probability_is_zero() {
        let mut builder = Options::builder();
        builder.new_erc_name_probability = 0.0;
        let mut it = Interpreter::new(builder.build().unwrap());
        it.run("name.rand name.rand name.rand").unwrap();
        assert_eq!(it.stacks().name.as_slice(), &["_n0", "_n0", "_n0"]);
    }

    #[test]
    fn rand_mints_fresh_names_when_probability_is_one() {
        let mut builder = Options::builder();
        builder.new_erc_name_probability = 1.0;
        let mut it = Interpreter::new(builder.build().unwrap());
        it.run("name.rand name.rand").unwrap();
        assert_eq!(it.stacks().name.as_slice(), &["_n0", "_n1"]);
    }

    #[test]
    fn randboundname_picks_a_bound_name() {
        let picked = names("a exec.define 1 b exec.define 2 name.randboundname");
        assert_eq!(picked.len(), 1);
        assert!(picked[0] == "a" || picked[0] == "b");
        assert!(names("name.randboundname").is_empty());
    }
}

mod exec {
    use super::*;

    #[test]
    fn if_keeps_one_branch() {
        assert_eq!(ints("true exec.if 1 2"), [1]);
        assert_eq!(ints("false exec.if 1 2"), [2]);
        // Without a boolean both branches run.
        assert_eq!(ints("exec.if 1 2"), [1, 2]);
    }

    #[test]
    fn combinators() {
        assert_eq!(ints("exec.k 1 2"), [1]);
        assert_eq!(ints("exec.s 1 2 3"), [1, 3, 2, 3]);
    }

    #[test]
    fn y_repeats_until_the_step_limit() {
        let opts = Options::builder().eval_push_limit(30).build().unwrap();
        let mut it = Interpreter::new(opts);
        let err = it.run("exec.y ( 1 )").unwrap_err();
        assert!(err.is_step_limit());
        assert!(it.stacks().integer.len() > 3);
        assert!(it.stacks().integer.as_slice().iter().all(|i| *i == 1));
    }

    #[test]
    fn do_range_counts_both_ways() {
        assert_eq!(ints("1 3 exec.do*range exec.noop"), [1, 2, 3]);
        assert_eq!(ints("3 1 exec.do*range exec.noop"), [3, 2, 1]);
        assert_eq!(ints("4 4 exec.do*range exec.noop"), [4]);
    }

    #[test]
    fn do_count_pushes_the_counter() {
        assert_eq!(ints("0 3 exec.do*count integer.+"), [3]);
        assert_eq!(ints("0 exec.do*count 5"), [0, 5]);
    }

    #[test]
    fn do_times_hides_the_counter() {
        assert_eq!(ints("0 4 exec.do*times ( 2 integer.+ )"), [8]);
    }

    #[test]
    fn define_binds_the_next_item() {
        assert_eq!(ints("sq exec.define ( integer.dup integer.* ) 7 sq"), [49]);
    }

    #[test]
    fn stackdepth_counts_pending_items() {
        assert_eq!(ints("exec.stackdepth 1 2"), [2, 1, 2]);
    }
}

mod code {
    use super::*;

    #[test]
    fn quote_moves_the_next_item() {
        assert_eq!(code("code.quote ( 1 2 )"), ["( 1 2 )"]);
        assert!(ints("code.quote 5").is_empty());
    }

    #[test]
    fn size_and_length() {
        assert_eq!(ints("code.quote ( 1 ( 2 ) ) code.size"), [4]);
        assert_eq!(ints("code.quote ( 1 ( 2 ) ) code.length"), [2]);
        assert_eq!(ints("code.quote 5 code.length"), [1]);
    }

    #[test]
    fn car_and_cdr() {
        assert_eq!(code("code.quote ( 1 2 3 ) code.car"), ["1"]);
        assert_eq!(code("code.quote ( 1 2 3 ) code.cdr"), ["( 2 3 )"]);
        assert_eq!(code("code.quote ( ) code.car"), ["( )"]);
        assert_eq!(code("code.quote x code.car"), ["x"]);
        assert_eq!(code("code.quote x code.cdr"), ["( )"]);
    }

    #[test]
    fn building_lists() {
        assert_eq!(code("code.quote 0 code.quote ( 1 2 ) code.cons"), ["( 0 1 2 )"]);
        assert_eq!(code("code.quote a code.quote b code.list"), ["( a b )"]);
        assert_eq!(
            code("code.quote ( 1 2 ) code.quote ( 3 ) code.append"),
            ["( 3 1 2 )"]
        );
        assert_eq!(code("code.quote 1 code.quote 2 code.append"), ["( 2 1 )"]);
    }

    #[test]
    fn predicates() {
        assert_eq!(bools("code.quote ( 1 ( 2 3 ) ) code.quote 3 code.contains"), [true]);
        assert_eq!(bools("code.quote ( 1 2 ) code.quote 3 code.contains"), [false]);
        assert_eq!(bools("code.quote 2 code.quote ( 1 2 ) code.member"), [true]);
        assert_eq!(bools("code.quote ( ) code.null code.quote x code.null"), [true, false]);
        assert_eq!(bools("code.quote x code.atom code.quote ( x ) code.atom"), [true, false]);
    }

    #[test]
    fn indexing_wraps() {
        assert_eq!(code("code.quote ( a b c ) 4 code.nth"), ["b"]);
        assert_eq!(code("code.quote ( a b c ) -1 code.nthcdr"), ["( b c )"]);
        assert_eq!(code("code.quote ( ) 3 code.nth"), ["( )"]);
        assert_eq!(code("code.quote ( a ( b c ) ) 2 code.extract"), ["( b c )"]);
        assert_eq!(code("code.quote ( a ( b c ) ) 5 code.extract"), ["( a ( b c ) )"]);
    }

    #[test]
    fn conversions() {
        assert_eq!(
            code("5 code.frominteger true code.fromboolean 1.5 code.fromfloat x code.fromname"),
            ["5", "true", "1.5", "x"]
        );
    }

    #[test]
    fn do_runs_then_pops() {
        let it = run("code.quote ( 1 2 integer.+ ) code.do");
        assert_eq!(it.stacks().integer.as_slice(), &[3]);
        assert!(it.stacks().code.is_empty());

        let it = run("code.quote ( 1 2 integer.+ ) code.do*");
        assert_eq!(it.stacks().integer.as_slice(), &[3]);
        assert!(it.stacks().code.is_empty());
    }

    #[test]
    fn if_runs_second_on_true() {
        assert_eq!(ints("code.quote 1 code.quote 2 true code.if"), [1]);
        assert_eq!(ints("code.quote 1 code.quote 2 false code.if"), [2]);
    }

    #[test]
    fn loops() {
        assert_eq!(ints("0 code.quote integer.+ 3 code.do*count"), [3]);
        assert_eq!(ints("0 code.quote ( 2 integer.+ ) 4 code.do*times"), [8]);
        assert_eq!(ints("code.quote exec.noop 2 4 code.do*range"), [2, 3, 4]);
    }

    #[test]
    fn define_and_definition() {
        assert_eq!(ints("code.quote ( 7 8 ) pair code.define pair"), [7, 8]);
        assert_eq!(
            code("f exec.define ( 1 2 ) name.quote f code.definition"),
            ["( 1 2 )"]
        );
        let it = run("g code.definition");
        assert_eq!(it.stacks().name.as_slice(), &["g"]);
        assert!(it.stacks().code.is_empty());
    }

    #[test]
    fn results_over_the_size_cap_are_noops() {
        let mut builder = Options::builder().max_points_in_program(4);
        builder.top_level_push_code = false;
        let mut it = Interpreter::new(builder.build().unwrap());
        it.run("code.quote ( 1 2 ) code.quote 3 code.list").unwrap();
        assert_eq!(
            it.stacks().code.as_slice(),
            &[tree("( 1 2 )"), Code::atom("3")]
        );
        it.run("code.append").unwrap();
        assert_eq!(it.stacks().code.as_slice(), &[tree("( 3 1 2 )")]);

        it.run("code.quote ( 1 2 3 4 5 6 )").unwrap();
        assert_eq!(it.stacks().code.as_slice(), &[tree("( 3 1 2 )")]);
        assert_eq!(it.stacks().integer.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rand_discards_programs_over_the_size_cap() {
        let mut builder = Options::builder().max_points_in_program(3);
        builder.top_level_push_code = false;
        let mut it = Interpreter::new(builder.build().unwrap());
        it.run(&"25 code.rand ".repeat(20)).unwrap();
        let stacks = it.stacks();
        assert!(stacks.code.as_slice().iter().all(|c| c.points() <= 3));
        assert!(stacks.integer.as_slice().iter().all(|&i| i == 25));
        assert_eq!(stacks.code.len() + stacks.integer.len(), 20);
    }

    #[test]
    fn rand_respects_the_requested_size() {
        for n in [1, 3, -5, 40] {
            let sizes = ints(&format!("{n} code.rand code.size"));
            assert_eq!(sizes.len(), 1);
            let cap = (n as i64).unsigned_abs().min(25) as i64;
            assert!((1..=cap).contains(&sizes[0]), "{n}: {sizes:?}");
        }
        let it = run("0 code.rand");
        assert_eq!(it.stacks().integer.as_slice(), &[0]);
        assert!(it.stacks().code.is_empty());
    }
}
