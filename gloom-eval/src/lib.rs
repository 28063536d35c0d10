
pub mod binding;
mod control;
pub mod import;
mod introspect;
mod list;
mod math;

pub use binding::{Binding, Bindings, Macro};
pub use gloom_core::Token;
pub use import::{LoadError, Loader, Module, NativeModule, NoModules};

use gloom_core::{
    value::render_list, Arena, BindingOp, Builtin, ControlOp, Handle, Kind, StackOp,
};
use gloom_parse::{parse, parse_minting};
use log::{debug, trace, warn};
use thiserror::Error;

/// Conditions that abort the current call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /**
    An operation found fewer stack cells than it needs.

    This is the only condition that is recovered from: the dispatch loop
    catches it and pushes its message onto main.
    */
    #[error("Error in {op}: Needs {needs} elements, Stack has {has}")]
    Underflow { op: String, needs: usize, has: usize },
    #[error("You can't remove what's not there!")]
    NegativeRemove { count: i64 },
    #[error("recursion limit of {limit} nested executions exceeded")]
    RecursionLimit { limit: usize },
}

/// Domain errors. These are never raised; their text is pushed as a value.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("Error in {op}: Not defined for value {value} of type {kind}")]
    Type {
        op: &'static str,
        value: Token,
        kind: Kind,
    },
    #[error("Error in {op}: Division by zero")]
    DivisionByZero { op: &'static str },
    #[error("Error in {op}: Integer overflow")]
    Overflow { op: &'static str },
    #[error("Error in {op}: Index {index} out of bounds for list of size {size}")]
    OutOfBounds {
        op: &'static str,
        index: i64,
        size: usize,
    },
    #[error("Error in {op}: Dangling reference {handle}")]
    Dangling { op: &'static str, handle: Token },
    #[error("Error in import: {0}")]
    Import(#[from] LoadError),
}

impl Fault {
    pub fn type_mismatch(op: &'static str, value: &Token) -> Self {
        Fault::Type {
            op,
            value: value.clone(),
            kind: gloom_core::classify(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How many executions may be nested inside one another.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { max_depth: 256 }
    }
}

pub struct Interpreter<'ctx> {
    main: Vec<Token>,
    retain: Vec<Token>,
    arena: Arena,
    context: &'ctx Bindings,
    bindings: Bindings,
    loader: &'ctx dyn Loader,
    depth: usize,
    config: Config,
}

impl<'ctx> Interpreter<'ctx> {
    /**
    `context` holds the built-in bindings shared by every interpreter. User
    definitions go into a table owned by this interpreter and shadow the
    context.
    */
    pub fn new(context: &'ctx Bindings, loader: &'ctx dyn Loader, config: Config) -> Self {
        Interpreter {
            main: Vec::new(),
            retain: Vec::new(),
            arena: Arena::new(),
            context,
            bindings: Bindings::new(),
            loader,
            depth: 0,
            config,
        }
    }

    /// Run top-level source. Every list literal becomes a fresh reference.
    pub fn evaluate(&mut self, source: &str) -> Result<(), Error> {
        let tokens = parse_minting(source, &mut self.arena);
        self.execute_code(tokens)
    }

    /// Run source with list literals kept inline.
    pub fn execute(&mut self, source: &str) -> Result<(), Error> {
        self.execute_code(parse(source))
    }

    pub fn execute_code(&mut self, tokens: Vec<Token>) -> Result<(), Error> {
        if self.depth >= self.config.max_depth {
            warn!("giving up after {} nested executions", self.depth);
            return Err(Error::RecursionLimit {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = tokens.into_iter().try_for_each(|token| self.step(token));
        self.depth -= 1;
        result
    }

    fn step(&mut self, token: Token) -> Result<(), Error> {
        trace!("{}", token);
        if let Some(rest) = token.strip_prefix('$') {
            let value = if rest.is_empty() { "$" } else { rest };
            self.push(Token::from(value));
            return Ok(());
        }
        match self.dispatch(&token) {
            Ok(true) => Ok(()),
            Ok(false) => {
                self.push(token);
                Ok(())
            }
            Err(err @ Error::Underflow { .. }) => {
                self.push(Token::from(err.to_string()));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Returns `false` if `name` is bound in neither table.
    fn dispatch(&mut self, name: &str) -> Result<bool, Error> {
        let binding = match self.bindings.get(name).or_else(|| self.context.get(name)) {
            None => return Ok(false),
            Some(binding) => binding.clone(),
        };
        match binding {
            Binding::Native(builtin) => self.native(builtin)?,
            Binding::Macro(mac) => self.invoke(name, &mac)?,
        }
        Ok(true)
    }

    fn native(&mut self, builtin: Builtin) -> Result<(), Error> {
        let op = builtin.name();
        match builtin {
            Builtin::Stack(StackOp::FromRetain) => {
                if self.retain.len() < builtin.needs() {
                    return Err(underflow(op, builtin.needs(), self.retain.len()));
                }
            }
            _ => self.require(op, builtin.needs())?,
        }
        match builtin {
            Builtin::List(op) => self.list_op(op),
            Builtin::Math(op) => self.math_op(op),
            Builtin::Control(ControlOp::If) => self.if_(),
            Builtin::Control(ControlOp::Loop) => self.loop_(),
            Builtin::Control(ControlOp::Rep) => self.rep(),
            Builtin::Binding(BindingOp::Def) => self.def(),
            Builtin::Binding(BindingOp::Eval) => self.eval(),
            Builtin::Stack(op) => self.stack_op(op),
            Builtin::Type(op) => self.type_op(op),
            Builtin::Debug(op) => self.debug_op(op),
            Builtin::Import => self.import(),
        }
    }

    fn invoke(&mut self, name: &str, mac: &Macro) -> Result<(), Error> {
        let args = self.pop_args(name, mac.arity())?;
        self.execute_code(mac.template().instantiate(&args))
    }

    fn require(&self, op: &str, needs: usize) -> Result<(), Error> {
        if self.main.len() < needs {
            Err(underflow(op, needs, self.main.len()))
        } else {
            Ok(())
        }
    }

    fn pop(&mut self, op: &str) -> Result<Token, Error> {
        self.main.pop().ok_or_else(|| underflow(op, 1, 0))
    }

    /// Pop `count` cells, topmost first.
    fn pop_args(&mut self, op: &str, count: usize) -> Result<Vec<Token>, Error> {
        self.require(op, count)?;
        let mut args = self.main.split_off(self.main.len() - count);
        args.reverse();
        Ok(args)
    }

    fn fault(&mut self, fault: Fault) {
        self.push(Token::from(fault.to_string()));
    }

    /// The list body behind `token` if it is a live reference, otherwise `token`.
    fn deref_or_keep(&self, token: Token) -> Token {
        match self.arena.deref(&token) {
            Some(body) => body.clone(),
            None => token,
        }
    }

    pub fn push(&mut self, value: Token) {
        self.main.push(value);
    }

    /// Bind `name` to `body` as a user definition, as `def` would.
    pub fn define(&mut self, name: &str, body: &str) {
        self.bindings.define(name, body);
    }

    pub fn main(&self) -> &[Token] {
        &self.main
    }

    pub fn retain(&self) -> &[Token] {
        &self.retain
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Empty both stacks. The arena and the bindings are kept.
    pub fn clear(&mut self) {
        self.main.clear();
        self.retain.clear();
    }

    /// Resolve every reference in `token` to the list it names.
    pub fn expand(&self, token: &str) -> String {
        self.arena.expand(token)
    }

    /// Main, bottom first, with references expanded.
    pub fn render_stack(&self) -> String {
        render_list(self.main.iter().map(|token| self.arena.expand(token)))
    }

    fn mint(&mut self, body: Token) -> Handle {
        let handle = self.arena.mint(body);
        debug!("minted {}", handle);
        handle
    }
}

fn underflow(op: &str, needs: usize, has: usize) -> Error {
    Error::Underflow {
        op: String::from(op),
        needs,
        has,
    }
}
