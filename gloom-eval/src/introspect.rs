use crate::{underflow, Error, Fault, Interpreter};
use gloom_core::{
    classify, matches,
    value::{from_bool, parse_int},
    Builtin, DebugOp, StackOp, Token, TypeOp,
};
use log::warn;

impl<'ctx> Interpreter<'ctx> {
    pub(crate) fn stack_op(&mut self, op: StackOp) -> Result<(), Error> {
        match op {
            StackOp::ToRetain => {
                let value = self.pop(">r")?;
                self.retain.push(value);
            }
            StackOp::FromRetain => {
                let value = self.retain.pop().ok_or_else(|| underflow("r>", 1, 0))?;
                self.push(value);
            }
        }
        Ok(())
    }

    pub(crate) fn type_op(&mut self, op: TypeOp) -> Result<(), Error> {
        match op {
            TypeOp::TypeOf => {
                // leaves the value in place
                let kind = match self.main.last() {
                    Some(top) => classify(top),
                    None => return Err(underflow("type", 1, 0)),
                };
                self.push(Token::from(kind.name()));
            }
            TypeOp::Is(kind) => {
                let value = self.pop(Builtin::Type(op).name())?;
                self.push(Token::from(from_bool(matches(&value, kind))));
            }
        }
        Ok(())
    }

    pub(crate) fn debug_op(&mut self, op: DebugOp) -> Result<(), Error> {
        match op {
            DebugOp::Size => {
                let selector = self.pop("debug.size")?;
                let size = if &*selector == "main" {
                    self.main.len()
                } else {
                    self.retain.len()
                };
                self.push(Token::from(size.to_string()));
            }
            DebugOp::Remove => {
                let count = self.pop("debug.remove")?;
                let n = match parse_int(&count) {
                    Some(n) => n,
                    None => {
                        self.fault(Fault::type_mismatch("debug.remove", &count));
                        return Ok(());
                    }
                };
                let n = match usize::try_from(n) {
                    Ok(n) => n,
                    Err(_) => {
                        warn!("debug.remove called with {}", n);
                        return Err(Error::NegativeRemove { count: n });
                    }
                };
                if n > self.main.len() {
                    return Err(underflow("debug.remove", n, self.main.len()));
                }
                self.main.truncate(self.main.len() - n);
            }
        }
        Ok(())
    }
}
