use crate::{builtins, library};
use gloom_eval::{Binding, Config, Interpreter, NoModules};
use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn run(source: &str) -> Vec<String> {
    let context = builtins();
    let mut interpreter = Interpreter::new(&context, &NoModules, Config::default());
    interpreter.evaluate(source).unwrap();
    interpreter
        .main()
        .iter()
        .map(|token| interpreter.expand(token))
        .collect()
}

macro_rules! builtins_test {
    ($input:expr, $expected:expr) => {{
        let expected: Vec<&str> = $expected.to_vec();
        assert_eq!(run($input), expected)
    }};
}

#[test]
fn library_names_are_unique() {
    let mut names: Vec<&str> = library().map(|(name, _)| *name).collect();
    let count = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), count);
}

#[test]
fn library_does_not_shadow_natives() {
    let natives = gloom_eval::Bindings::natives();
    for (name, _) in library() {
        assert!(!natives.contains(name), "{} is a native", name);
    }
}

#[test]
fn builtins_bind_everything() {
    let context = builtins();
    assert!(matches!(context.get("+"), Some(Binding::Native(_))));
    assert!(matches!(context.get("dup"), Some(Binding::Macro(_))));
    assert!(matches!(context.get("math.pow"), Some(Binding::Macro(_))));
}

#[test]
fn builtins_dup_1() {
    builtins_test!("7 dup", ["7", "7"])
}

#[test]
fn builtins_over_1() {
    builtins_test!("1 2 over", ["1", "2", "1"])
}

#[test]
fn builtins_swap_1() {
    builtins_test!("1 2 swap", ["2", "1"])
}

#[test]
fn builtins_drop_1() {
    builtins_test!("1 2 drop", ["1"])
}

#[test]
fn builtins_drop_list() {
    builtins_test!("1 [ 2 3 ] drop", ["1"])
}

#[test]
fn builtins_define_alias() {
    builtins_test!("[ x ] 5 ! x", ["5"])
}

#[test]
fn builtins_debug_clear() {
    builtins_test!("1 2 3 debug.clear", [])
}

#[test]
fn builtins_booleans() {
    builtins_test!("t f", ["-1", "0"])
}

#[test]
fn builtins_not() {
    builtins_test!("t not f not", ["0", "-1"])
}

#[test]
fn builtins_not_other_is_noop() {
    builtins_test!("5 not", [])
}

#[test]
fn builtins_and() {
    builtins_test!("t t and t f and f t and f f and", ["-1", "0", "0", "0"])
}

#[test]
fn builtins_or() {
    builtins_test!("t t or t f or f t or f f or", ["-1", "-1", "-1", "0"])
}

#[test]
fn builtins_xor() {
    builtins_test!("t t xor t f xor f t xor f f xor", ["0", "-1", "-1", "0"])
}

#[test]
fn builtins_nand_nor_xnor() {
    builtins_test!("t t nand f f nor t f xnor", ["0", "-1", "0"])
}

#[test]
fn builtins_less() {
    builtins_test!("2 3 < 3 2 < 3 3 <", ["-1", "0", "0"])
}

#[test]
fn builtins_greater_equal() {
    builtins_test!("4 3 >= 3 3 >= 2 3 >=", ["-1", "-1", "0"])
}

#[test]
fn builtins_less_equal() {
    builtins_test!("3 4 <= 3 3 <= 4 3 <=", ["-1", "-1", "0"])
}

#[test]
fn builtins_equal() {
    builtins_test!("3 3 = 3 4 = 3 4 != 3 3 !=", ["-1", "0", "-1", "0"])
}

#[test]
fn builtins_pow() {
    builtins_test!("2 3 pow 3 2 ^ 5 1 math.pow", ["8", "9", "5"])
}

#[test]
fn builtins_max_min() {
    builtins_test!("3 7 max 3 7 min 7 3 math.max 7 3 math.min", ["7", "3", "7", "3"])
}

#[test]
fn builtins_mod_aliases() {
    builtins_test!("-7 3 % -7 3 math.mod", ["2", "2"])
}

#[test]
fn end_to_end_add() {
    builtins_test!("3 4 +", ["7"])
}

#[test]
fn end_to_end_if() {
    builtins_test!("-1 [ 1 ] [ 2 ] if", ["1"])
}

#[test]
fn end_to_end_size() {
    builtins_test!("[ 1 2 3 ] size", ["3"])
}

#[test]
fn end_to_end_division_by_zero() {
    builtins_test!("5 0 / 1", ["Error in /: Division by zero", "1"])
}

#[test]
fn end_to_end_dup() {
    builtins_test!("[ dup ] [ $1 $1 ] def 7 dup", ["7", "7"])
}

#[test]
fn end_to_end_factorial() {
    builtins_test!(
        "[ fact ] [ dup 1 > [ dup 1 - fact * ] [ ] if ] def 5 fact",
        ["120"]
    )
}

#[test]
fn end_to_end_countdown() {
    builtins_test!("3 [ 1 - dup 0 > ] loop", ["0"])
}

#[test]
fn end_to_end_sum_list() {
    // walk a list by index, keeping the running total on the retain stack
    builtins_test!(
        "0 >r [ 4 5 6 ] [ dup size 0 > [ 0 swap remove r> + >r t ] [ f ] if ] loop r>",
        ["[ ]", "15"]
    )
}

#[test]
fn user_definitions_do_not_leak() {
    let context = builtins();
    let mut first = Interpreter::new(&context, &NoModules, Config::default());
    first.evaluate("[ t ] 5 def t").unwrap();
    assert_eq!(first.main(), &[gloom_eval::Token::from("5")]);

    let mut second = Interpreter::new(&context, &NoModules, Config::default());
    second.evaluate("t").unwrap();
    assert_eq!(second.main(), &[gloom_eval::Token::from("-1")]);
}

#[quickcheck]
fn prop_comparisons(a: i64, b: i64) -> bool {
    let flag = |b: bool| String::from(if b { "-1" } else { "0" });
    run(&format!(
        "{a} {b} < {a} {b} > {a} {b} <= {a} {b} >= {a} {b} = {a} {b} !=",
        a = a,
        b = b
    )) == vec![
        flag(a < b),
        flag(a > b),
        flag(a <= b),
        flag(a >= b),
        flag(a == b),
        flag(a != b),
    ]
}

#[quickcheck]
fn prop_max_min(a: i64, b: i64) -> bool {
    run(&format!("{a} {b} max {a} {b} min", a = a, b = b))
        == vec![a.max(b).to_string(), a.min(b).to_string()]
}

#[quickcheck]
fn prop_pow(base: i8, exponent: u8) -> TestResult {
    let base = i64::from(base % 10);
    let exponent = u32::from(exponent % 5) + 1;
    let expected = base.pow(exponent).to_string();
    TestResult::from_bool(run(&format!("{} {} pow", base, exponent)) == vec![expected])
}
