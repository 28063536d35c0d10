//! Programs exercised by the criterion benchmarks.

use gloom_eval::{Config, Interpreter, NoModules};

/// Counts down from ten thousand with `loop`.
pub const COUNTDOWN: &str = "10000 [ 1 - dup 0 > ] loop";

/// Recursive factorial through a user definition, repeated.
pub const FACTORIAL: &str = "[ fact ] [ dup 1 > [ dup 1 - fact * ] [ ] if ] def [ 20 fact drop ] 200 rep";

/// Builds `[ 0 1 .. 499 ]` one `insert` at a time, then sums it through the retain stack.
pub const LIST_SUM: &str = "[ ] [ dup >r size dup r> insert ] 500 rep 0 >r [ dup size 0 > [ 0 swap remove r> + >r t ] [ f ] if ] loop r>";

/// Evaluates `source` against a fresh interpreter and returns the rendered main stack.
pub fn run(source: &str) -> String {
    let context = gloom_builtins::builtins();
    let mut interpreter = Interpreter::new(&context, &NoModules, Config::default());
    match interpreter.evaluate(source) {
        Ok(()) => interpreter.render_stack(),
        Err(err) => format!("error: {}", err),
    }
}

#[test]
fn programs_run() {
    assert_eq!(run(COUNTDOWN), "[ 0 ]");
    assert_eq!(run(FACTORIAL), "[ ]");
    assert_eq!(run(LIST_SUM), "[ [ ] 124750 ]");
}
