
use gloom_eval::{Bindings, Config, Error, Interpreter, Loader};

/// What a line left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// `main: [ ... ]` with every reference expanded.
    pub stack: String,
    /// The line asked to end the session.
    pub exit: bool,
}

/**
The engine side of an interactive session.

Every line starts from empty stacks. Definitions and the reference arena
carry over from line to line.
*/
pub struct Repl<'ctx> {
    interpreter: Interpreter<'ctx>,
}

impl<'ctx> Repl<'ctx> {
    pub fn new(context: &'ctx Bindings, loader: &'ctx dyn Loader, config: Config) -> Self {
        Repl {
            interpreter: Interpreter::new(context, loader, config),
        }
    }

    pub fn eval_show(&mut self, line: &str) -> Result<Output, Error> {
        self.interpreter.clear();
        self.interpreter.evaluate(line)?;
        Ok(Output {
            stack: format!("main: {}", self.interpreter.render_stack()),
            exit: self.should_exit(),
        })
    }

    /// The session ends when `exit` is on top of main. An empty main counts as `1`.
    pub fn should_exit(&self) -> bool {
        let top = self.interpreter.main().last().map_or("1", |token| &**token);
        top == "exit"
    }

    pub fn interpreter(&self) -> &Interpreter<'ctx> {
        &self.interpreter
    }
}
