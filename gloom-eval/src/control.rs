use crate::{Binding, Error, Fault, Interpreter, Macro};
use gloom_core::{
    value::{parse_int, strip_list, FALSE, TRUE},
    Handle, Token,
};
use gloom_parse::Template;
use log::debug;
use std::rc::Rc;

impl<'ctx> Interpreter<'ctx> {
    /**
    `eval`: pop a body, bind its placeholders from the top of main and run it.

    `$1` takes the topmost cell, `$2` the one below, and so on.
    */
    pub(crate) fn eval(&mut self) -> Result<(), Error> {
        let value = self.pop("eval")?;
        let source = match Handle::parse(&value) {
            None => value,
            Some(handle) => match self.arena().get(handle) {
                Some(body) => body.clone(),
                None => {
                    self.fault(Fault::Dangling {
                        op: "eval",
                        handle: value,
                    });
                    return Ok(());
                }
            },
        };
        let template = if source.starts_with('[') {
            Template::new(strip_list(&source))
        } else {
            Template::new(&source)
        };
        let args = self.pop_args("eval", template.arity())?;
        self.execute_code(template.instantiate(&args))
    }

    /// `eval` as a nested dispatch would run it: underflow becomes a value.
    fn guarded_eval(&mut self) -> Result<(), Error> {
        match self.eval() {
            Err(err @ Error::Underflow { .. }) => {
                self.push(Token::from(err.to_string()));
                Ok(())
            }
            result => result,
        }
    }

    fn run_quoted(&mut self, body: Token) -> Result<(), Error> {
        self.push(body);
        self.guarded_eval()
    }

    /// `cond true false if`
    pub(crate) fn if_(&mut self) -> Result<(), Error> {
        let if_false = self.pop("if")?;
        let if_false = self.deref_or_keep(if_false);
        let if_true = self.pop("if")?;
        let if_true = self.deref_or_keep(if_true);

        self.guarded_eval()?;
        let condition = self.pop("if")?;
        match &*condition {
            TRUE => self.run_quoted(if_true),
            FALSE => self.run_quoted(if_false),
            _ => Ok(()),
        }
    }

    /// Run the body, then continue while it leaves `-1` on top.
    pub(crate) fn loop_(&mut self) -> Result<(), Error> {
        let body = self.pop("loop")?;
        loop {
            self.run_quoted(body.clone())?;
            let flag = self.pop("loop")?;
            if &*flag != TRUE {
                return Ok(());
            }
        }
    }

    /// `body n rep`
    pub(crate) fn rep(&mut self) -> Result<(), Error> {
        let count = self.pop("rep")?;
        let body = self.pop("rep")?;
        match parse_int(&count) {
            None => self.fault(Fault::type_mismatch("rep", &count)),
            Some(count) => {
                for _ in 0..count {
                    self.run_quoted(body.clone())?;
                }
            }
        }
        Ok(())
    }

    /// `names body def`
    pub(crate) fn def(&mut self) -> Result<(), Error> {
        let body = self.pop("def")?;
        let body = self.deref_or_keep(body);
        let names = self.pop("def")?;
        let names = self.deref_or_keep(names);

        let mac = Rc::new(Macro::new(body));
        let names = if names.starts_with('[') {
            strip_list(&names)
        } else {
            &*names
        };
        for name in names.split_whitespace() {
            let name = name.strip_prefix(':').unwrap_or(name);
            if name.is_empty() {
                continue;
            }
            debug!("def {} = {} (arity {})", name, mac.body(), mac.arity());
            self.bindings.insert(Token::from(name), Binding::Macro(mac.clone()));
        }
        Ok(())
    }
}
